use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that applies a parsed function to a parsed argument
///
/// `function` runs first and must produce a callable; `argument` runs from
/// where it stopped and its output is passed to the callable. Equivalent to
/// `function.flat_map(|f| argument.map(f))` without cloning `argument`.
#[derive(Clone)]
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PA, B> Parser<'code> for Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code, Token = PF::Token>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type Token = PF::Token;
    type Output = B;

    fn parse(&self, cursor: Cursor<'code, PF::Token>) -> ParseResult<'code, PF::Token, B> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code, Token = PF::Token>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers producing functions
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PA, B>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'code, Token = Self::Token>,
        Self::Output: FnOnce(PA::Output) -> B,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}
