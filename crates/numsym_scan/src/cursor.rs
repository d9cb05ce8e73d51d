//! Forward-only cursor for outer parsers driving the scan engine.
//!
//! The cursor is `Copy`, so a parser can snapshot it before a speculative
//! match and restore it afterwards by plain assignment.

use tracing::trace;

/// Character cursor over a borrowed buffer.
///
/// Invariant: `0 <= pos <= chars.len()`. `pos == chars.len()` is the
/// end-of-buffer state, not an error.
#[derive(Copy, Clone, Debug)]
pub struct ScanCursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> ScanCursor<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        ScanCursor { chars, pos: 0 }
    }

    /// The buffer this cursor walks.
    #[inline]
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Position as the signed start index the engine entry points take.
    #[inline]
    pub fn index(&self) -> isize {
        isize::try_from(self.pos).unwrap_or(isize::MAX)
    }

    /// Character under the cursor, `None` at end of buffer.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    pub fn is_digit(&self) -> bool {
        self.current().is_some_and(|c| c.is_ascii_digit())
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Number of characters left, including the current one.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.pos)
    }

    /// Step past the current character. No-op at end of buffer.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Move the cursor directly, e.g. to a
    /// [`ScanResult::next_index`](crate::ScanResult::next_index).
    ///
    /// Positions past the end are clamped to the end-of-buffer state.
    pub fn set_position(&mut self, pos: usize) {
        if pos > self.chars.len() {
            trace!(pos, len = self.chars.len(), "clamping cursor to end");
        }
        self.pos = pos.min(self.chars.len());
    }
}

#[cfg(test)]
mod tests;
