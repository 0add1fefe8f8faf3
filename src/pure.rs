use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of its value
#[derive(Debug, Clone)]
pub struct Pure<T, O> {
    value: O,
    _token: PhantomData<fn() -> T>,
}

impl<T, O> Pure<T, O> {
    pub fn new(value: O) -> Self {
        Pure {
            value,
            _token: PhantomData,
        }
    }
}

impl<'code, T: Token + 'code, O: Clone> Parser<'code> for Pure<T, O> {
    type Token = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, O> {
        Ok((self.value.clone(), cursor))
    }
}

/// Succeed with `value` and leave the cursor where it is
pub fn pure<T: Token, O: Clone>(value: O) -> Pure<T, O> {
    Pure::new(value)
}
