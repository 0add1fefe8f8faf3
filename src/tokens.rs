use crate::cursor::Cursor;
use crate::error::{EOF, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser that matches a fixed run of tokens atomically
///
/// Either the whole run matches and is consumed, or the parser fails at the
/// cursor it started from with the attempted window as the "actual" text.
/// A partial match never leaves the cursor part way through the run.
#[derive(Debug, Clone)]
pub struct Tokens<T> {
    expected: Vec<T>,
}

impl<T: Token> Tokens<T> {
    pub fn new(expected: impl IntoIterator<Item = T>) -> Self {
        Tokens {
            expected: expected.into_iter().collect(),
        }
    }
}

impl<'code, T: Token + 'code> Parser<'code> for Tokens<T> {
    type Token = T;
    type Output = Vec<T>;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, Vec<T>> {
        let remaining = cursor.remaining();
        let window = &remaining[..self.expected.len().min(remaining.len())];

        if window == self.expected.as_slice() {
            return Ok((self.expected.clone(), cursor.advance(window.len())));
        }

        let actual = if window.is_empty() {
            EOF.to_owned()
        } else {
            T::describe_slice(window)
        };
        Err(ParseError::mismatch(
            cursor,
            T::describe_slice(&self.expected),
            actual,
        ))
    }
}

/// Match `expected` token for token, consuming all of it or nothing
pub fn tokens<T: Token>(expected: impl IntoIterator<Item = T>) -> Tokens<T> {
    Tokens::new(expected)
}
