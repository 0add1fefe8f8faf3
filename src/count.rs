use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::token::Token;
use crate::zero_or_more::repeat;
use std::iter;
use std::marker::PhantomData;
use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};

/// How many times [`Count`] runs its parser: at least `lower`, at most `upper`
///
/// Built from an exact count or a range through [`IntoBounds`]. Values are
/// kept signed so that a negative count can be reported instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: i64,
    pub upper: Option<i64>,
}

impl Bounds {
    pub fn exactly(count: i64) -> Self {
        Bounds {
            lower: count,
            upper: Some(count),
        }
    }

    /// Validate the bounds, returning the required runs and the optional extra runs
    fn check<'code, T: Token>(
        self,
        cursor: Cursor<'code, T>,
    ) -> Result<(usize, Option<usize>), ParseError<'code, T>> {
        if self.lower < 0 {
            return Err(ParseError::NegativeCount {
                remainder: cursor,
                count: self.lower,
            });
        }
        match self.upper {
            Some(upper) if upper < self.lower => Err(ParseError::EmptyRange {
                remainder: cursor,
                lower: self.lower,
                upper,
            }),
            upper => Ok((
                saturate(self.lower),
                upper.map(|upper| saturate(upper - self.lower)),
            )),
        }
    }
}

fn saturate(count: i64) -> usize {
    usize::try_from(count).unwrap_or(usize::MAX)
}

fn widen<N: TryInto<i64>>(value: N) -> i64 {
    value.try_into().unwrap_or(i64::MAX)
}

/// Conversion into repetition [`Bounds`]
///
/// Implemented for plain integers (an exact count) and for every range form.
/// Half-open ranges exclude their end, so `2..3` means exactly two.
pub trait IntoBounds {
    fn into_bounds(self) -> Bounds;
}

impl IntoBounds for Bounds {
    fn into_bounds(self) -> Bounds {
        self
    }
}

macro_rules! impl_into_bounds {
    ($($int:ty),*) => {
        $(
            impl IntoBounds for $int {
                fn into_bounds(self) -> Bounds {
                    Bounds::exactly(widen(self))
                }
            }

            impl IntoBounds for Range<$int> {
                fn into_bounds(self) -> Bounds {
                    Bounds {
                        lower: widen(self.start),
                        upper: Some(widen(self.end).saturating_sub(1)),
                    }
                }
            }

            impl IntoBounds for RangeInclusive<$int> {
                fn into_bounds(self) -> Bounds {
                    let (start, end) = self.into_inner();
                    Bounds {
                        lower: widen(start),
                        upper: Some(widen(end)),
                    }
                }
            }

            impl IntoBounds for RangeFrom<$int> {
                fn into_bounds(self) -> Bounds {
                    Bounds {
                        lower: widen(self.start),
                        upper: None,
                    }
                }
            }

            impl IntoBounds for RangeTo<$int> {
                fn into_bounds(self) -> Bounds {
                    Bounds {
                        lower: 0,
                        upper: Some(widen(self.end).saturating_sub(1)),
                    }
                }
            }

            impl IntoBounds for RangeToInclusive<$int> {
                fn into_bounds(self) -> Bounds {
                    Bounds {
                        lower: 0,
                        upper: Some(widen(self.end)),
                    }
                }
            }
        )*
    };
}

impl_into_bounds!(i32, i64, isize, u32, usize);

/// Parser combinator that runs a parser a bounded number of times in sequence
///
/// The first `lower` runs are required and the first failure among them is
/// returned. After that the parser keeps running until it stops matching or
/// `upper` is reached, whichever comes first; with no upper bound this
/// behaves like [`ZeroOrMore`](crate::ZeroOrMore) for the extra runs.
///
/// A negative lower bound or an empty range fails before any input is read.
pub struct Count<P, C> {
    parser: P,
    bounds: Bounds,
    _collection: PhantomData<fn() -> C>,
}

impl<P, C> Count<P, C> {
    pub fn new(parser: P, bounds: impl IntoBounds) -> Self {
        Count {
            parser,
            bounds: bounds.into_bounds(),
            _collection: PhantomData,
        }
    }

    /// Gather the outputs into a different collection, e.g. `String` for `char`s
    pub fn collect<C2>(self) -> Count<P, C2> {
        Count::new(self.parser, self.bounds)
    }
}

impl<P: Clone, C> Clone for Count<P, C> {
    fn clone(&self) -> Self {
        Count::new(self.parser.clone(), self.bounds)
    }
}

impl<'code, P, C> Parser<'code> for Count<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<P::Output>,
{
    type Token = P::Token;
    type Output = C;

    fn parse(&self, cursor: Cursor<'code, P::Token>) -> ParseResult<'code, P::Token, C> {
        let (required, extra) = self.bounds.check(cursor)?;

        let mut items = C::default();
        let mut cursor = cursor;
        for _ in 0..required {
            let (value, next) = self.parser.parse(cursor)?;
            items.extend(iter::once(value));
            cursor = next;
        }

        if extra == Some(0) {
            return Ok((items, cursor));
        }
        let cursor = repeat(&self.parser, cursor, &mut items, extra)?;
        Ok((items, cursor))
    }
}

/// Convenience function to create a Count parser collecting into a `Vec`
///
/// ```
/// use combinate::{Cursor, Parser, count, token};
///
/// let data = b"aaaaa";
/// let (run, cursor) = count(2..=4, token(b'a')).parse(Cursor::new(data)).unwrap();
/// assert_eq!(run, b"aaaa");
/// assert_eq!(cursor.position(), 4);
/// ```
pub fn count<'code, P>(bounds: impl IntoBounds, parser: P) -> Count<P, Vec<P::Output>>
where
    P: Parser<'code>,
{
    Count::new(parser, bounds)
}

/// Extension trait to add .count() method support for parsers
pub trait CountExt<'code>: Parser<'code> + Sized {
    fn count(self, bounds: impl IntoBounds) -> Count<Self, Vec<Self::Output>> {
        Count::new(self, bounds)
    }
}

/// Implement CountExt for all parsers
impl<'code, P> CountExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pure::pure;
    use crate::satisfy::{any, token};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_exact_count() {
        let data = b"aaab";
        let parser = count(3, token(b'a'));

        let (results, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(results, b"aaa");
        assert_eq!(cursor.remaining(), b"b");
    }

    #[test]
    fn test_exact_count_too_few() {
        let data = b"aab";
        let parser = token(b'a').count(3);

        let error = parser.parse(Cursor::new(data)).unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.actual(), "b");
    }

    #[test]
    fn test_count_zero_reads_nothing() {
        let data: [u8; 0] = [];
        let cursor = Cursor::new(&data);

        let (results, next) = count(0, token(b'a')).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(next, cursor);

        let data = b"zzz";
        let cursor = Cursor::new(data);
        let (results, next) = count(0usize, token(b'a')).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_negative_count_reads_nothing() {
        let data = b"aaa";
        let cursor = Cursor::new(data);

        let error = count(-1, token(b'a')).parse(cursor).unwrap_err();
        assert!(matches!(error, ParseError::NegativeCount { count: -1, .. }));
        assert_eq!(error.remainder(), cursor);
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_negative_range_start() {
        let data = b"aaa";

        let error = count(-2..=3, token(b'a')).parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::NegativeCount { count: -2, .. }));
    }

    #[test]
    fn test_empty_range() {
        let data = b"aaa";
        let cursor = Cursor::new(data);

        let error = count(3..=1, token(b'a')).parse(cursor).unwrap_err();
        assert!(matches!(error, ParseError::EmptyRange { lower: 3, upper: 1, .. }));
        assert_eq!(error.position(), 0);

        let error = count(2..2, token(b'a')).parse(cursor).unwrap_err();
        assert!(matches!(error, ParseError::EmptyRange { .. }));
    }

    #[test]
    fn test_inclusive_range() {
        let parser = count(2..=4, token('a')).collect::<String>();

        let data = chars("aab");
        let (run, cursor) = parser.parse(Cursor::new(&data)).unwrap();
        assert_eq!(run, "aa");
        assert_eq!(cursor.position(), 2);

        let data = chars("aaaaa");
        let (run, cursor) = parser.parse(Cursor::new(&data)).unwrap();
        assert_eq!(run, "aaaa");
        assert_eq!(cursor.position(), 4);

        let data = chars("");
        assert!(parser.parse(Cursor::new(&data)).is_err());

        let data = chars("ab");
        let error = parser.parse(Cursor::new(&data)).unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_half_open_range_excludes_end() {
        let data = b"aaaa";
        let parser = count(2..3, token(b'a'));

        let (results, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_range_from_is_unbounded() {
        let data = b"aaaaaab";
        let parser = count(1.., token(b'a'));

        let (results, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(results.len(), 6);
        assert_eq!(cursor.remaining(), b"b");
    }

    #[test]
    fn test_range_to() {
        let data = b"aaaa";

        let (results, _) = count(..3, token(b'a')).parse(Cursor::new(data)).unwrap();
        assert_eq!(results.len(), 2);

        let (results, _) = count(..=3, token(b'a')).parse(Cursor::new(data)).unwrap();
        assert_eq!(results.len(), 3);

        let data = b"b";
        let (results, cursor) = count(..=3, token(b'a')).parse(Cursor::new(data)).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_exact_count_of_zero_width_parser() {
        let data = b"x";
        let parser = count(3, pure::<u8, _>(7));

        let (results, cursor) = parser.parse(Cursor::new(data)).unwrap();
        assert_eq!(results, vec![7, 7, 7]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_unbounded_zero_width_parser_is_rejected() {
        let data = b"x";
        let parser = count(0.., pure::<u8, _>(7));

        let error = parser.parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(error, ParseError::NoProgress { .. }));
    }

    #[test]
    fn test_bounds_conversions() {
        assert_eq!(4i32.into_bounds(), Bounds::exactly(4));
        assert_eq!((1i32..4).into_bounds(), Bounds { lower: 1, upper: Some(3) });
        assert_eq!((1usize..=4).into_bounds(), Bounds { lower: 1, upper: Some(4) });
        assert_eq!((2i64..).into_bounds(), Bounds { lower: 2, upper: None });
        assert_eq!((..=5u32).into_bounds(), Bounds { lower: 0, upper: Some(5) });
        assert_eq!(any::<u8>().count(..2).bounds, Bounds { lower: 0, upper: Some(1) });
    }
}
