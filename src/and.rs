use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs two parsers in sequence and pairs their outputs
///
/// Chained `.and()` calls nest to the left: `a.and(b).and(c)` yields
/// `((a, b), c)`, so destructuring reads in parse order.
///
/// Example:
/// ```
/// use combinate::{AndExt, Cursor, Parser, token};
///
/// let data = b"a=1";
/// let ((key, value), cursor) = token(b'a')
///     .and(token(b'='))
///     .and(token(b'1'))
///     .parse(Cursor::new(data))
///     .map(|(((key, _), value), cursor)| ((key, value), cursor))
///     .unwrap();
/// assert_eq!((key, value), (b'a', b'1'));
/// assert!(cursor.at_end());
/// ```
#[derive(Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code, P1::Token>) -> ParseResult<'code, P1::Token, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
