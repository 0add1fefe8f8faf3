use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::iter;
use std::marker::PhantomData;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Outputs are gathered into `C`, a `Vec` unless changed with
/// [`ZeroOrMore::collect`]. Repetition stops at the first mismatch, which is
/// not reported; any other error is. A repeated parser that succeeds without
/// consuming input fails the whole repetition with
/// [`ParseError::NoProgress`] rather than looping forever.
pub struct ZeroOrMore<P, C> {
    parser: P,
    _collection: PhantomData<fn() -> C>,
}

impl<P, C> ZeroOrMore<P, C> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore {
            parser,
            _collection: PhantomData,
        }
    }

    /// Gather the outputs into a different collection, e.g. `String` for `char`s
    pub fn collect<C2>(self) -> ZeroOrMore<P, C2> {
        ZeroOrMore::new(self.parser)
    }
}

impl<P: Clone, C> Clone for ZeroOrMore<P, C> {
    fn clone(&self) -> Self {
        ZeroOrMore::new(self.parser.clone())
    }
}

impl<'code, P, C> Parser<'code> for ZeroOrMore<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<P::Output>,
{
    type Token = P::Token;
    type Output = C;

    fn parse(&self, cursor: Cursor<'code, P::Token>) -> ParseResult<'code, P::Token, C> {
        let mut items = C::default();
        let cursor = repeat(&self.parser, cursor, &mut items, None)?;
        Ok((items, cursor))
    }
}

/// Run `parser` repeatedly, pushing each output into `items`
///
/// With `limit` set, stops after that many matches. Without one, a match that
/// leaves the cursor in place is a [`ParseError::NoProgress`]. Returns the
/// cursor after the last match.
pub(crate) fn repeat<'code, P, C>(
    parser: &P,
    mut cursor: Cursor<'code, P::Token>,
    items: &mut C,
    limit: Option<usize>,
) -> Result<Cursor<'code, P::Token>, ParseError<'code, P::Token>>
where
    P: Parser<'code>,
    C: Extend<P::Output>,
{
    let mut matched = 0;
    while limit.is_none_or(|limit| matched < limit) {
        match parser.parse(cursor) {
            Ok((_, next)) if limit.is_none() && next == cursor => {
                return Err(ParseError::NoProgress { remainder: cursor });
            }
            Ok((value, next)) => {
                items.extend(iter::once(value));
                cursor = next;
                matched += 1;
            }
            Err(error) if error.is_recoverable() => break,
            Err(error) => return Err(error),
        }
    }
    Ok(cursor)
}

/// Convenience function to create a ZeroOrMore parser collecting into a `Vec`
pub fn zero_or_more<'code, P>(parser: P) -> ZeroOrMore<P, Vec<P::Output>>
where
    P: Parser<'code>,
{
    ZeroOrMore::new(parser)
}

/// Extension trait to add .zero_or_more() method support for parsers
pub trait ZeroOrMoreExt<'code>: Parser<'code> + Sized {
    fn zero_or_more(self) -> ZeroOrMore<Self, Vec<Self::Output>> {
        ZeroOrMore::new(self)
    }
}

/// Implement ZeroOrMoreExt for all parsers
impl<'code, P> ZeroOrMoreExt<'code> for P where P: Parser<'code> {}
