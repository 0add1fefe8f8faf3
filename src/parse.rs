use crate::cursor::Cursor;
use crate::discard::discard_right;
use crate::eof::eof;
use crate::error::ParseError;
use crate::parser::Parser;

/// Run `parser` over the whole of `input`
///
/// Succeeds only if the parser matches and every token is consumed; a parser
/// that stops early fails here with the first unconsumed token as "actual".
///
/// ```
/// use combinate::{parse, token, zero_or_more};
///
/// assert!(parse(zero_or_more(token(b'a')), b"aaa").is_ok());
///
/// let error = parse(zero_or_more(token(b'a')), b"aaab").unwrap_err();
/// assert_eq!(error.position(), 3);
/// assert_eq!(error.expected(), "EOF");
/// ```
pub fn parse<'code, P>(
    parser: P,
    input: &'code [P::Token],
) -> Result<P::Output, ParseError<'code, P::Token>>
where
    P: Parser<'code>,
{
    discard_right(parser, eof())
        .parse(Cursor::new(input))
        .map(|(output, _)| output)
}
