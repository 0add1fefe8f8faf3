//! # Combinate - Parser Combinator Library
//!
//! A generic parser combinator library: small parsers over a slice of tokens
//! combine into larger ones until a whole grammar is a single value that can
//! be run with [`parse`].
//!
//! - **Any token type**: bytes, `char`s, or a lexer's own token enum (see [`Token`])
//! - **Full backtracking**: [`choice`] retries from the original position, and a
//!   failing alternation blames whichever branch got furthest
//! - **Zero panics**: every failure is a [`ParseError`], including grammar mistakes
//!   like a negative repetition count
//! - **Readable diagnostics**: [`ParseError::report`] prints the failing line with a caret
//!
//! ```
//! use combinate::text::{char, chars};
//! use combinate::{DiscardExt, MapExt, OneOrMoreExt, OrExt, parse, satisfy};
//!
//! let digit = satisfy("digit", |c: &char| c.is_ascii_digit());
//! let number = digit.one_or_more().collect::<String>().map(|s| s.parse::<i64>().unwrap_or(0));
//! let signed = char('-').discard_left(number.clone()).map(|n| -n).or(number);
//!
//! assert_eq!(parse(signed, &chars("-42")).unwrap(), -42);
//! ```

pub mod and;
pub mod apply;
pub mod choice;
pub mod count;
pub mod cursor;
pub mod discard;
pub mod eof;
pub mod error;
pub mod fail;
pub mod flat_map;
pub mod lazy;
pub mod map;
pub mod one_or_more;
pub mod optional;
pub mod parse;
pub mod parser;
pub mod pure;
pub mod satisfy;
pub mod text;
pub mod token;
pub mod tokens;
pub mod zero_or_more;

pub use and::{And, AndExt, and};
pub use apply::{Apply, ApplyExt, apply};
pub use choice::{Choice, OrExt, choice};
pub use count::{Bounds, Count, CountExt, IntoBounds, count};
pub use cursor::Cursor;
pub use discard::{DiscardExt, DiscardLeft, DiscardRight, discard_left, discard_right};
pub use eof::{Eof, eof};
pub use error::{EOF, Location, ParseError};
pub use fail::{Fail, fail};
pub use flat_map::{FlatMap, FlatMapExt, flat_map};
pub use lazy::{Lazy, lazy};
pub use map::{Map, MapExt, map};
pub use one_or_more::{OneOrMore, OneOrMoreExt, one_or_more};
pub use optional::{Optional, OptionalExt, optional};
pub use parse::parse;
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parser, SharedParser};
pub use pure::{Pure, pure};
pub use satisfy::{Satisfy, any, none_of, not, one_of, satisfy, token};
pub use token::Token;
pub use tokens::{Tokens, tokens};
pub use zero_or_more::{ZeroOrMore, ZeroOrMoreExt, zero_or_more};
