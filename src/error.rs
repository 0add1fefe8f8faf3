use crate::cursor::Cursor;
use crate::token::Token;
use std::borrow::Cow;
use thiserror::Error;

/// Description used for the "actual" side of a mismatch at end of input
pub const EOF: &str = "EOF";

/// Why a parser failed
///
/// Every variant carries the cursor at which the failure happened. The number
/// of tokens left after that cursor is what [`choice`](crate::choice()) uses to
/// decide which of two failing alternatives got furthest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError<'code, T: Token> {
    /// The input did not match what the parser expected
    #[error("expected {expected}, found {actual} at position {}", .remainder.position())]
    Mismatch {
        remainder: Cursor<'code, T>,
        expected: Cow<'static, str>,
        actual: String,
    },

    /// A repetition was asked to run a negative number of times
    #[error("cannot repeat a parser {count} times")]
    NegativeCount { remainder: Cursor<'code, T>, count: i64 },

    /// A repetition range whose maximum is below its minimum
    #[error("repetition range {lower}..={upper} is empty")]
    EmptyRange {
        remainder: Cursor<'code, T>,
        lower: i64,
        upper: i64,
    },

    /// A repeated parser succeeded without consuming input
    #[error("repeated parser made no progress at position {}", .remainder.position())]
    NoProgress { remainder: Cursor<'code, T> },
}

impl<'code, T: Token> ParseError<'code, T> {
    /// Create a mismatch error at `remainder`
    pub fn mismatch(
        remainder: Cursor<'code, T>,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<String>,
    ) -> Self {
        ParseError::Mismatch {
            remainder,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a mismatch error describing whatever token is next at `remainder`
    pub fn unexpected(remainder: Cursor<'code, T>, expected: impl Into<Cow<'static, str>>) -> Self {
        let actual = match remainder.peek() {
            Some((token, _)) => token.describe(),
            None => EOF.to_owned(),
        };
        ParseError::mismatch(remainder, expected, actual)
    }

    /// The cursor at which the failure happened
    pub fn remainder(&self) -> Cursor<'code, T> {
        match self {
            ParseError::Mismatch { remainder, .. }
            | ParseError::NegativeCount { remainder, .. }
            | ParseError::EmptyRange { remainder, .. }
            | ParseError::NoProgress { remainder } => *remainder,
        }
    }

    /// Index of the token at which the failure happened
    pub fn position(&self) -> usize {
        self.remainder().position()
    }

    /// Number of tokens left unconsumed when the failure happened
    pub fn remaining_len(&self) -> usize {
        self.remainder().remaining_len()
    }

    /// Human readable description of what was expected
    pub fn expected(&self) -> Cow<'_, str> {
        match self {
            ParseError::Mismatch { expected, .. } => Cow::Borrowed(expected.as_ref()),
            ParseError::NegativeCount { .. } => Cow::Borrowed("a non-negative repetition count"),
            ParseError::EmptyRange { .. } => Cow::Borrowed("a non-empty repetition range"),
            ParseError::NoProgress { .. } => {
                Cow::Borrowed("a repeated parser that consumes input")
            }
        }
    }

    /// Human readable description of what was found instead
    pub fn actual(&self) -> Cow<'_, str> {
        match self {
            ParseError::Mismatch { actual, .. } => Cow::Borrowed(actual.as_str()),
            ParseError::NegativeCount { count, .. } => Cow::Owned(count.to_string()),
            ParseError::EmptyRange { lower, upper, .. } => {
                Cow::Owned(format!("{}..={}", lower, upper))
            }
            ParseError::NoProgress { .. } => Cow::Borrowed("a zero-width match"),
        }
    }

    /// Whether an alternative may be tried after this failure
    ///
    /// Only mismatches are recoverable. The other variants are programmer
    /// errors in the grammar: a repetition stops quietly at a mismatch but
    /// returns any of these. `choice` and `optional` recover from every failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::Mismatch { .. })
    }

    /// Line and in-line offset of the failure
    pub fn location(&self) -> Location {
        let (source, position) = self.remainder().inner();
        Location::locate(source, position)
    }

    /// Render the error with surrounding lines and a caret under the failure
    ///
    /// ```text
    /// expected ), found EOF at position 6 (line 1, offset 6)
    ///
    ///   > 1 | (1+2*3
    ///               ^--- here
    /// ```
    pub fn report(&self) -> String {
        let (source, position) = self.remainder().inner();
        let location = Location::locate(source, position);
        let mut out = format!(
            "{} (line {}, offset {})\n\n",
            self, location.line, location.offset
        );
        for line in context_lines(source, location) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// One-based line number and zero-based token offset within that line
///
/// Columns are not computed: how wide a token renders depends on the token
/// type and the terminal, while the offset is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub offset: usize,
}

impl Location {
    fn locate<T: Token>(source: &[T], position: usize) -> Self {
        let mut line = 1;
        let mut line_start = 0;

        for (i, token) in source.iter().enumerate() {
            if i >= position {
                break;
            }
            if token.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        Location {
            line,
            offset: position - line_start,
        }
    }
}

/// Up to two lines either side of the failing line, with a caret line under it
fn context_lines<T: Token>(source: &[T], location: Location) -> Vec<String> {
    let first = location.line.saturating_sub(2);
    let last = location.line + 2;
    let mut lines = Vec::new();

    // A trailing newline still opens an (empty) final line
    let split = source.split(|token| token.is_newline());
    for (index, line) in split.enumerate() {
        let number = index + 1;
        if number < first || number > last {
            continue;
        }

        // Newline tokens are dropped by `split`, so text tokens render verbatim
        let content = T::describe_slice(line);
        let prefix = if number == location.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content));

        if number == location.line {
            let before = &line[..location.offset.min(line.len())];
            let mut width = T::describe_slice(before).chars().count();
            if !before.is_empty() && location.offset < line.len() {
                width += T::SEPARATOR.chars().count();
            }
            let pointer = " ".repeat(prefix.chars().count() + width);
            lines.push(format!("{}^--- here", pointer));
        }
    }

    lines
}
