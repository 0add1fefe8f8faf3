use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::sync::OnceLock;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs once, on the first call to `parse`; the parser it returns
/// is kept and reused for every later call. A rule can therefore refer to
/// itself through `lazy(rule)` without recursing forever while the grammar is
/// being built.
///
/// Recursive rules run on the call stack: every level of nesting the input
/// reaches through a `lazy` rule (each open parenthesis, say) costs a few
/// stack frames, and there is no trampolining. Repetition itself is
/// iterative, so write lists and left-associative chains with
/// [`zero_or_more`](crate::zero_or_more()) rather than right recursion like
/// `term '+' expression`; then depth follows nesting, not input length.
/// Deeply nested input can still exhaust the stack of the calling thread.
///
/// Example:
/// ```
/// use combinate::{BoxedExt, BoxedParser, DiscardExt, MapExt, OrExt, lazy, parse, token};
///
/// // nested := '(' nested ')' | 'x'
/// fn nested<'code>() -> BoxedParser<'code, u8, usize> {
///     token(b'(')
///         .discard_left(lazy(nested))
///         .discard_right(token(b')'))
///         .map(|depth| depth + 1)
///         .or(token(b'x').map(|_| 0))
///         .boxed()
/// }
///
/// assert_eq!(parse(nested(), b"((x))").unwrap(), 2);
/// ```
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceLock<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            parser: OnceLock::new(),
        }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, P::Token>) -> ParseResult<'code, P::Token, P::Output> {
        self.parser.get_or_init(&self.factory).parse(cursor)
    }
}

impl<F: Clone, P> Clone for Lazy<F, P> {
    // A clone builds its own parser on first use
    fn clone(&self) -> Self {
        Lazy {
            factory: self.factory.clone(),
            parser: OnceLock::new(),
        }
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
