//! Owned character buffer holding one candidate number string.

use std::fmt;

use crate::ScanCursor;

/// A number string decoded into characters.
///
/// Scanning indexes by character rather than by byte so multi-byte sign
/// symbols (e.g. `'−'`, U+2212) occupy a single slot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScanBuffer {
    chars: Vec<char>,
}

impl ScanBuffer {
    pub fn new(text: &str) -> Self {
        ScanBuffer {
            chars: text.chars().collect(),
        }
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Create a cursor positioned at the first character.
    pub fn cursor(&self) -> ScanCursor<'_> {
        ScanCursor::new(&self.chars)
    }
}

impl From<&str> for ScanBuffer {
    fn from(text: &str) -> Self {
        ScanBuffer::new(text)
    }
}

impl fmt::Display for ScanBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}
