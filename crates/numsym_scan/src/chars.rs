//! Symbol character helpers shared by sign and separator specs.

use numsym_diagnostic::{Result, SymbolError};
use smallvec::SmallVec;

/// Inline storage for symbol sequences; real-world signs and separators
/// are one to three characters long.
pub(crate) type Symbols = SmallVec<[char; 4]>;

/// Check that `symbols` is non-empty and free of the zero-value character.
pub(crate) fn validate_symbols(field: &'static str, symbols: &[char]) -> Result<()> {
    if symbols.is_empty() {
        return Err(SymbolError::configuration(
            field,
            "the symbol sequence is empty",
        ));
    }
    if let Some(pos) = symbols.iter().position(|&c| c == '\0') {
        return Err(SymbolError::configuration(
            field,
            format!("symbol at index {pos} is the zero-value character"),
        ));
    }
    Ok(())
}

/// Compare `symbols` against `buffer[index..]`.
///
/// Returns the buffer index of the last matched character on a full,
/// contiguous match. An empty `symbols` never matches.
pub(crate) fn match_symbols_at(symbols: &[char], buffer: &[char], index: usize) -> Option<usize> {
    if symbols.is_empty() {
        return None;
    }
    let window = buffer.get(index..)?;
    if window.len() < symbols.len() {
        return None;
    }
    for (expected, actual) in symbols.iter().zip(window) {
        if expected != actual {
            return None;
        }
    }
    Some(index + symbols.len() - 1)
}

/// Render a symbol sequence as a quoted string for listings.
pub(crate) fn quoted(symbols: &[char]) -> String {
    let text: String = symbols.iter().collect();
    format!("{text:?}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests;
