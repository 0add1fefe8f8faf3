use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use std::marker::PhantomData;

/// Parser that succeeds only at the end of input
#[derive(Debug, Clone, Copy)]
pub struct Eof<T> {
    _token: PhantomData<fn() -> T>,
}

impl<T> Eof<T> {
    pub fn new() -> Self {
        Eof {
            _token: PhantomData,
        }
    }
}

impl<T> Default for Eof<T> {
    fn default() -> Self {
        Eof::new()
    }
}

impl<'code, T: Token + 'code> Parser<'code> for Eof<T> {
    type Token = T;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, ()> {
        if cursor.at_end() {
            Ok(((), cursor))
        } else {
            Err(ParseError::unexpected(cursor, "EOF"))
        }
    }
}

/// Verify that all input has been consumed
pub fn eof<T: Token>() -> Eof<T> {
    Eof::new()
}
