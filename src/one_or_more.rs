use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::zero_or_more::repeat;
use std::iter;
use std::marker::PhantomData;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence is required and its failure is returned as is; the
/// rest are gathered like [`ZeroOrMore`](crate::ZeroOrMore).
pub struct OneOrMore<P, C> {
    parser: P,
    _collection: PhantomData<fn() -> C>,
}

impl<P, C> OneOrMore<P, C> {
    pub fn new(parser: P) -> Self {
        OneOrMore {
            parser,
            _collection: PhantomData,
        }
    }

    /// Gather the outputs into a different collection, e.g. `String` for `char`s
    pub fn collect<C2>(self) -> OneOrMore<P, C2> {
        OneOrMore::new(self.parser)
    }
}

impl<P: Clone, C> Clone for OneOrMore<P, C> {
    fn clone(&self) -> Self {
        OneOrMore::new(self.parser.clone())
    }
}

impl<'code, P, C> Parser<'code> for OneOrMore<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<P::Output>,
{
    type Token = P::Token;
    type Output = C;

    fn parse(&self, cursor: Cursor<'code, P::Token>) -> ParseResult<'code, P::Token, C> {
        let (first, next) = self.parser.parse(cursor)?;
        if next == cursor {
            return Err(ParseError::NoProgress { remainder: cursor });
        }

        let mut items = C::default();
        items.extend(iter::once(first));
        let cursor = repeat(&self.parser, next, &mut items, None)?;
        Ok((items, cursor))
    }
}

/// Convenience function to create a OneOrMore parser collecting into a `Vec`
pub fn one_or_more<'code, P>(parser: P) -> OneOrMore<P, Vec<P::Output>>
where
    P: Parser<'code>,
{
    OneOrMore::new(parser)
}

/// Extension trait to add .one_or_more() method support for parsers
pub trait OneOrMoreExt<'code>: Parser<'code> + Sized {
    fn one_or_more(self) -> OneOrMore<Self, Vec<Self::Output>> {
        OneOrMore::new(self)
    }
}

/// Implement OneOrMoreExt for all parsers
impl<'code, P> OneOrMoreExt<'code> for P where P: Parser<'code> {}
