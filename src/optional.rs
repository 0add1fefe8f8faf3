use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that falls back to a default value when the parser does not match
///
/// Behaves like `parser.or(pure(otherwise))`: on a mismatch the cursor is left
/// where it was and a clone of `otherwise` is returned. Any failure is
/// replaced by the default.
///
/// Example:
/// ```
/// use combinate::{Cursor, OptionalExt, Parser, token};
///
/// let sign = token(b'-').optional(b'+');
///
/// let (value, cursor) = sign.parse(Cursor::new(b"-1")).unwrap();
/// assert_eq!((value, cursor.position()), (b'-', 1));
///
/// let (value, cursor) = sign.parse(Cursor::new(b"1")).unwrap();
/// assert_eq!((value, cursor.position()), (b'+', 0));
/// ```
#[derive(Clone)]
pub struct Optional<P, O> {
    parser: P,
    otherwise: O,
}

impl<P, O> Optional<P, O> {
    pub fn new(parser: P, otherwise: O) -> Self {
        Optional { parser, otherwise }
    }
}

impl<'code, P, O> Parser<'code> for Optional<P, O>
where
    P: Parser<'code, Output = O>,
    O: Clone,
{
    type Token = P::Token;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, P::Token>) -> ParseResult<'code, P::Token, O> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.otherwise.clone(), cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P, otherwise: P::Output) -> Optional<P, P::Output>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Optional::new(parser, otherwise)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self, otherwise: Self::Output) -> Optional<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Optional::new(self, otherwise)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
