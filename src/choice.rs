use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same cursor, so whatever the first one
/// consumed before failing is simply forgotten. When both fail, the error
/// reported is the one that got furthest into the input (fewest tokens left);
/// on a tie the second alternative's error wins. In a long chain of `.or()`
/// calls this blames the alternative that came closest to matching.
///
/// Every failure of the first alternative is recovered from, including
/// grammar errors such as a negative repetition count.
#[derive(Clone)]
pub struct Choice<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Choice<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Choice { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Choice<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token, Output = P1::Output>,
{
    type Token = P1::Token;
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code, P1::Token>) -> ParseResult<'code, P1::Token, P1::Output> {
        let error1 = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };

        match self.parser2.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error2) => Err(furthest(error1, error2)),
        }
    }
}

/// Pick the error that consumed more input; ties go to `right`
pub fn furthest<'code, T: Token>(
    left: ParseError<'code, T>,
    right: ParseError<'code, T>,
) -> ParseError<'code, T> {
    if left.remaining_len() >= right.remaining_len() {
        right
    } else {
        left
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P1, P2>(parser1: P1, parser2: P2) -> Choice<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token, Output = P1::Output>,
{
    Choice::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Choice<Self, P>
    where
        P: Parser<'code, Token = Self::Token, Output = Self::Output>,
    {
        Choice::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count;
    use crate::fail::fail;
    use crate::flat_map::FlatMapExt;
    use crate::map::MapExt;
    use crate::satisfy::token;
    use crate::tokens::tokens;

    #[test]
    fn test_or_first_succeeds() {
        let data = b"abc";
        let parser = choice(token(b'a'), token(b'b'));

        let (byte, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_or_second_succeeds() {
        let data = b"bcd";
        let parser = choice(token(b'a'), token(b'b'));

        let (byte, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'b');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_or_method_chain() {
        let data = b"d";
        let parser = token(b'a').or(token(b'b')).or(token(b'c')).or(token(b'd'));

        let (byte, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(byte, b'd');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_second_starts_from_original_cursor() {
        // The first alternative consumes "ab" before failing on 'd'
        let data = b"abd";
        let left = token(b'a').flat_map(|_| token(b'b')).flat_map(|_| token(b'c'));
        let right = count(3, token(b'a').or(token(b'b')).or(token(b'd'))).map(|_| b'!');

        let (value, cursor) = left.or(right).parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b'!');
        assert!(cursor.at_end());
    }

    #[test]
    fn test_furthest_error_is_reported() {
        let data = b"abx";
        let cursor = Cursor::new(data);
        let far = tokens(*b"ab").flat_map(|_| token(b'c')).map(|_| ());
        let near = token(b'z').map(|_| ());

        let error = far.clone().or(near.clone()).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.expected(), "c");

        let error = near.or(far).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.expected(), "c");
    }

    #[test]
    fn test_tie_prefers_right() {
        let data = b"q";
        let parser = token(b'a').or(token(b'b'));

        let error = parser.parse(Cursor::new(data)).unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.expected(), "b");
    }

    #[test]
    fn test_tie_prefers_right_with_fail() {
        let data = b"q";
        let parser = fail::<u8, u8>("left", "l").or(fail::<u8, u8>("right", "r"));

        let error = parser.parse(Cursor::new(data)).unwrap_err();
        assert_eq!(error.expected(), "right");
    }

    #[test]
    fn test_second_tried_after_precondition_error() {
        let data = b"aa";
        let parser = count(-1, token(b'a')).or(count(2, token(b'a')));

        let (value, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(value, b"aa");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_furthest_error_beats_precondition_error() {
        let data = b"abx";
        let left = count(1, token(b'a'))
            .flat_map(|_| token(b'b'))
            .flat_map(|_| token(b'c').map(|c| vec![c]));
        let right = count(-1, token(b'a'));

        let error = left.or(right).parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::Mismatch { .. }));
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_tied_precondition_error_goes_right() {
        let data = b"b";
        let parser = token(b'a').map(|a| vec![a]).or(count(-3, token(b'a')));

        let error = parser.parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::NegativeCount { count: -3, .. }));
    }
}
