//! Parsers over `char` tokens
//!
//! Text input is parsed as a slice of `char`s, so a `&str` is first split
//! with [`chars`]. Repetitions of character parsers can be gathered straight
//! into a `String`:
//!
//! ```
//! use combinate::text::{chars, string};
//! use combinate::{DiscardExt, OneOrMoreExt, parse, satisfy};
//!
//! let word = satisfy("letter", |c: &char| c.is_alphabetic()).one_or_more().collect::<String>();
//! let greeting = string("hello ").discard_left(word);
//!
//! assert_eq!(parse(greeting, &chars("hello world")).unwrap(), "world");
//! ```

use crate::map::Map;
use crate::satisfy::{Satisfy, token};
use crate::tokens::{Tokens, tokens};

/// Split text into the `char` tokens the parsers in this module read
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Match a single character
pub fn char(expected: char) -> Satisfy<char, impl Fn(&char) -> bool + Clone> {
    token(expected)
}

/// Match `expected` character for character, returning it as a `String`
///
/// All or nothing like [`tokens`]: a partial match consumes no input.
pub fn string(expected: &str) -> Map<Tokens<char>, fn(Vec<char>) -> String> {
    Map::new(tokens(expected.chars()), into_string as fn(Vec<char>) -> String)
}

fn into_string(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}
