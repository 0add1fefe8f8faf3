use crate::cursor::Cursor;
use crate::error::{EOF, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes one token if it passes a predicate
///
/// This is the base primitive: a `Satisfy` only ever succeeds by advancing
/// the cursor one token, so anything built from it consumes input on success.
#[derive(Clone)]
pub struct Satisfy<T, F> {
    expected: Cow<'static, str>,
    predicate: F,
    _token: PhantomData<fn() -> T>,
}

impl<T, F> Satisfy<T, F> {
    pub fn new(expected: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Satisfy {
            expected: expected.into(),
            predicate,
            _token: PhantomData,
        }
    }
}

impl<'code, T, F> Parser<'code> for Satisfy<T, F>
where
    T: Token + 'code,
    F: Fn(&T) -> bool,
{
    type Token = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        match cursor.peek() {
            Some((token, next)) if (self.predicate)(token) => Ok((token.clone(), next)),
            Some((token, _)) => Err(ParseError::mismatch(
                cursor,
                self.expected.clone(),
                token.describe(),
            )),
            None => Err(ParseError::mismatch(cursor, self.expected.clone(), EOF)),
        }
    }
}

/// Match one token for which `predicate` holds
pub fn satisfy<T, F>(expected: impl Into<Cow<'static, str>>, predicate: F) -> Satisfy<T, F>
where
    T: Token,
    F: Fn(&T) -> bool,
{
    Satisfy::new(expected, predicate)
}

/// Match one token equal to `expected`
pub fn token<T: Token>(expected: T) -> Satisfy<T, impl Fn(&T) -> bool + Clone> {
    let description = expected.describe();
    satisfy(description, move |token: &T| *token == expected)
}

/// Match any single token
pub fn any<T: Token>() -> Satisfy<T, impl Fn(&T) -> bool + Clone> {
    satisfy("anything", |_: &T| true)
}

/// Match one token contained in `set`
pub fn one_of<T: Token>(set: impl IntoIterator<Item = T>) -> Satisfy<T, impl Fn(&T) -> bool + Clone> {
    let set: Vec<T> = set.into_iter().collect();
    let description = format!("one of '{}'", T::describe_slice(&set));
    satisfy(description, move |token: &T| set.contains(token))
}

/// Match one token not contained in `set`
pub fn none_of<T: Token>(set: impl IntoIterator<Item = T>) -> Satisfy<T, impl Fn(&T) -> bool + Clone> {
    let set: Vec<T> = set.into_iter().collect();
    let description = format!("something not in '{}'", T::describe_slice(&set));
    satisfy(description, move |token: &T| !set.contains(token))
}

/// Match any single token except `excluded`
pub fn not<T: Token>(excluded: T) -> Satisfy<T, impl Fn(&T) -> bool + Clone> {
    let description = format!("anything but '{}'", excluded.describe());
    satisfy(description, move |token: &T| *token != excluded)
}
