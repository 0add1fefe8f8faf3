use std::fmt;

/// Trait for the elements a parser consumes
///
/// Parsers are generic over the token type, so the same combinators work on
/// bytes, characters, or a lexer's own token enum. The only requirements are
/// equality (for [`token`](crate::token()) and [`tokens`](crate::tokens())) and a
/// way to describe tokens in error messages.
///
/// Custom token types can rely on the defaults, which describe tokens through
/// their `Debug` output:
///
/// ```rust
/// use combinate::Token;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Lexeme {
///     Number(i64),
///     Plus,
/// }
///
/// impl Token for Lexeme {}
///
/// assert_eq!(Lexeme::Plus.describe(), "Plus");
/// ```
pub trait Token: Clone + PartialEq + fmt::Debug {
    /// Separator placed between tokens when a window of them is described
    const SEPARATOR: &'static str = " ";

    /// Describe a single token for error reporting
    fn describe(&self) -> String {
        format!("{:?}", self)
    }

    /// Describe a window of tokens for error reporting
    fn describe_slice(tokens: &[Self]) -> String {
        tokens
            .iter()
            .map(Token::describe)
            .collect::<Vec<_>>()
            .join(Self::SEPARATOR)
    }

    /// Whether this token ends a line, used to compute line numbers in reports
    fn is_newline(&self) -> bool {
        false
    }
}

impl Token for char {
    const SEPARATOR: &'static str = "";

    fn describe(&self) -> String {
        self.to_string()
    }

    fn describe_slice(tokens: &[Self]) -> String {
        tokens.iter().collect()
    }

    fn is_newline(&self) -> bool {
        *self == '\n'
    }
}

impl Token for u8 {
    const SEPARATOR: &'static str = "";

    fn describe(&self) -> String {
        String::from_utf8_lossy(&[*self]).into_owned()
    }

    fn describe_slice(tokens: &[Self]) -> String {
        String::from_utf8_lossy(tokens).into_owned()
    }

    fn is_newline(&self) -> bool {
        *self == b'\n'
    }
}

macro_rules! display_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Token for $ty {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_token!(u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, String);

impl Token for &'static str {
    fn describe(&self) -> String {
        (*self).to_owned()
    }

    fn is_newline(&self) -> bool {
        *self == "\n"
    }
}
