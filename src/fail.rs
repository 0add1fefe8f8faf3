use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed mismatch, without reading input
#[derive(Debug, Clone)]
pub struct Fail<T, O> {
    expected: Cow<'static, str>,
    actual: String,
    _phantom: PhantomData<fn() -> (T, O)>,
}

impl<T, O> Fail<T, O> {
    pub fn new(expected: impl Into<Cow<'static, str>>, actual: impl Into<String>) -> Self {
        Fail {
            expected: expected.into(),
            actual: actual.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T: Token + 'code, O> Parser<'code> for Fail<T, O> {
    type Token = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, O> {
        Err(ParseError::mismatch(
            cursor,
            self.expected.clone(),
            self.actual.clone(),
        ))
    }
}

/// Always fail with the given expected/actual descriptions
pub fn fail<T: Token, O>(
    expected: impl Into<Cow<'static, str>>,
    actual: impl Into<String>,
) -> Fail<T, O> {
    Fail::new(expected, actual)
}
