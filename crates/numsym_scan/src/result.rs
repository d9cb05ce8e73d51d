//! What one search call reports back to the outer parser.

use crate::{SymbolLocation, SymbolMatch};

/// Outcome of a single engine or collection search.
///
/// `hit_end_of_buffer` is the normal terminal signal when the start index
/// equals the buffer length; it is never reported as an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanResult {
    pub matched: bool,
    /// Last buffer index belonging to the match.
    pub consumed_index: Option<usize>,
    pub hit_end_of_buffer: bool,
    /// Index the search started at.
    pub start_index: usize,
    /// Where the matched symbol sits relative to the digits.
    pub location: Option<SymbolLocation>,
    /// Served from a latch instead of a fresh comparison.
    pub from_latch: bool,
    /// Winning collection member, when the search went through a collection.
    pub member: Option<usize>,
}

impl ScanResult {
    pub fn end_of_buffer(start_index: usize) -> Self {
        ScanResult {
            hit_end_of_buffer: true,
            ..Self::no_match(start_index)
        }
    }

    pub fn no_match(start_index: usize) -> Self {
        ScanResult {
            matched: false,
            consumed_index: None,
            hit_end_of_buffer: false,
            start_index,
            location: None,
            from_latch: false,
            member: None,
        }
    }

    pub(crate) fn from_match(
        start_index: usize,
        half: SymbolMatch,
        location: SymbolLocation,
    ) -> Self {
        if !half.matched {
            return Self::no_match(start_index);
        }
        ScanResult {
            matched: true,
            consumed_index: Some(half.last_index),
            hit_end_of_buffer: false,
            start_index,
            location: Some(location),
            from_latch: half.from_latch,
            member: None,
        }
    }

    #[must_use]
    pub(crate) fn with_member(mut self, member: usize) -> Self {
        self.member = Some(member);
        self
    }

    /// Index where scanning should resume.
    ///
    /// One past the match for a fresh match; the start index otherwise,
    /// since a latched result consumed nothing at this position.
    pub fn next_index(&self) -> usize {
        match self.consumed_index {
            Some(end) if !self.from_latch => end + 1,
            _ => self.start_index,
        }
    }
}

#[cfg(test)]
mod tests;
