use crate::token::Token;
use std::fmt;

/// An immutable read position over a token slice
///
/// Advancing never touches the source: [`Cursor::peek`] hands back a new
/// cursor one token further along and leaves `self` untouched, so any cursor
/// can be kept and resumed from later. This is what makes backtracking in
/// [`choice`](crate::choice()) free.
pub struct Cursor<'code, T> {
    data: &'code [T],
    position: usize,
}

impl<'code, T> Cursor<'code, T> {
    /// Create a cursor positioned at the first token of `data`
    pub fn new(data: &'code [T]) -> Self {
        Cursor { data, position: 0 }
    }

    /// Peek at the next token, returning it together with a cursor past it
    ///
    /// Returns `None` at the end of input.
    pub fn peek(&self) -> Option<(&'code T, Self)> {
        let data = self.data;
        data.get(self.position).map(|token| {
            (
                token,
                Cursor {
                    data,
                    position: self.position + 1,
                },
            )
        })
    }

    /// Check if every token has been consumed
    pub fn at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Move forward by `count` tokens, clamped to the end of input
    pub fn advance(self, count: usize) -> Self {
        Cursor {
            data: self.data,
            position: self.position.saturating_add(count).min(self.data.len()),
        }
    }

    /// Index of the next token in the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The full source this cursor reads from
    pub fn source(&self) -> &'code [T] {
        self.data
    }

    /// The tokens not yet consumed
    pub fn remaining(&self) -> &'code [T] {
        &self.data[self.position.min(self.data.len())..]
    }

    /// Number of tokens not yet consumed
    pub fn remaining_len(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Consume the cursor and return its source and position
    pub fn inner(self) -> (&'code [T], usize) {
        (self.data, self.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

// Cursors are equal when they read the same source at the same position.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Token> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("remaining", &T::describe_slice(self.remaining()))
            .finish()
    }
}
