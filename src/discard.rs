use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs two parsers in sequence and keeps the right output
///
/// The `*>` of applicative parsing: useful for dropping an opening delimiter,
/// e.g. `token('(').discard_left(expression)`.
#[derive(Clone)]
pub struct DiscardLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> DiscardLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        DiscardLeft { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for DiscardLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code, P1::Token>) -> ParseResult<'code, P1::Token, P2::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Parser combinator that runs two parsers in sequence and keeps the left output
///
/// The `<*` of applicative parsing: useful for dropping a terminator,
/// e.g. `cell.discard_right(token('\n'))`.
#[derive(Clone)]
pub struct DiscardRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> DiscardRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        DiscardRight { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for DiscardRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code, P1::Token>) -> ParseResult<'code, P1::Token, P1::Output> {
        let (value, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Run `parser1` then `parser2`, returning only the output of `parser2`
pub fn discard_left<'code, P1, P2>(parser1: P1, parser2: P2) -> DiscardLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    DiscardLeft::new(parser1, parser2)
}

/// Run `parser1` then `parser2`, returning only the output of `parser1`
pub fn discard_right<'code, P1, P2>(parser1: P1, parser2: P2) -> DiscardRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    DiscardRight::new(parser1, parser2)
}

/// Extension trait to add .discard_left() and .discard_right() method support for parsers
pub trait DiscardExt<'code>: Parser<'code> + Sized {
    /// Run `other` after `self` and keep only `other`'s output
    fn discard_left<P>(self, other: P) -> DiscardLeft<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        DiscardLeft::new(self, other)
    }

    /// Run `other` after `self` and keep only `self`'s output
    fn discard_right<P>(self, other: P) -> DiscardRight<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        DiscardRight::new(self, other)
    }
}

/// Implement DiscardExt for all parsers
impl<'code, P> DiscardExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satisfy::{any, token};

    #[test]
    fn test_discard_left_keeps_right() {
        let data = b"(x)";
        let parser = token(b'(').discard_left(any::<u8>());

        let (value, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b'x');
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_discard_right_keeps_left() {
        let data = b"x;";
        let parser = discard_right(any::<u8>(), token(b';'));

        let (value, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b'x');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_delimited() {
        let data = b"[a]";
        let parser = token(b'[').discard_left(any::<u8>()).discard_right(token(b']'));

        let (value, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b'a');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_first_failure_wins() {
        let data = b"ab";
        let cursor = Cursor::new(data);

        let error = discard_left(token(b'x'), token(b'b')).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);

        let error = discard_right(token(b'x'), token(b'b')).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_second_failure_propagates() {
        let data = b"ax";
        let cursor = Cursor::new(data);

        let error = discard_left(token(b'a'), token(b'b')).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 1);

        let error = discard_right(token(b'a'), token(b'b')).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 1);
        assert_eq!(error.actual(), "x");
    }
}
