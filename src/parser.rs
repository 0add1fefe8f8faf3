use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::token::Token;
use std::sync::Arc;

/// Result of running a parser: the output and the cursor after it, or the failure
pub type ParseResult<'code, T, O> = Result<(O, Cursor<'code, T>), ParseError<'code, T>>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to either an output and the
/// cursor after it, or a [`ParseError`]. Running the same parser on the same
/// cursor twice gives the same result, so parsers can be reused freely and a
/// failed alternative can simply be discarded.
pub trait Parser<'code> {
    /// The element type this parser consumes
    type Token: Token + 'code;

    /// The value produced on success
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser
///
/// Needed wherever a grammar refers to itself: a recursive rule cannot name
/// its own concrete combinator type, but it can return a `BoxedParser`.
pub type BoxedParser<'code, T, O> = Box<dyn Parser<'code, Token = T, Output = O> + Send + Sync + 'code>;

/// A type-erased parser that can be cloned cheaply and used in several places
pub type SharedParser<'code, T, O> = Arc<dyn Parser<'code, Token = T, Output = O> + Send + Sync + 'code>;

/// Extension trait to add .boxed() and .shared() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Token, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Box::new(self)
    }

    fn shared(self) -> SharedParser<'code, Self::Token, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Arc::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
