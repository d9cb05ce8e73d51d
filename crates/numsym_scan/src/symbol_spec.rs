//! Negative-number sign conventions.
//!
//! A [`SymbolSpec`] couples an immutable configuration (where the sign sits
//! and which characters spell it) with the mutable [`ScanState`] of the
//! parse currently using it.
//!
//! # Gate and latches
//!
//! - The *digit gate* closes the first time the outer parser reports a
//!   consumed digit. A closed gate refuses every further leading match and
//!   never reopens until [`SymbolSpec::reset_processing_state`].
//! - Each half (leading, trailing) owns a *latch*. Once a half matches,
//!   later calls for that half return the cached index without comparing
//!   characters again.

use std::fmt;

use numsym_diagnostic::{Result, SymbolError};
use tracing::{debug, trace};

use crate::chars::{match_symbols_at, quoted, validate_symbols, Symbols};
use crate::SymbolPosition;

/// Per-parse processing state of a [`SymbolSpec`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanState {
    /// Digit gate. One-way within a parse.
    pub found_first_digit: bool,
    /// Last buffer index of the latched leading match.
    pub leading_end: Option<usize>,
    /// Last buffer index of the latched trailing match.
    pub trailing_end: Option<usize>,
}

/// Outcome of matching one half of a [`SymbolSpec`] at a position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolMatch {
    pub matched: bool,
    /// Last index of the match, or the tried index on a miss.
    pub last_index: usize,
    /// The result came from a latch rather than a fresh comparison.
    pub from_latch: bool,
}

impl SymbolMatch {
    pub(crate) fn miss(index: usize) -> Self {
        SymbolMatch {
            matched: false,
            last_index: index,
            from_latch: false,
        }
    }

    pub(crate) fn hit(last_index: usize) -> Self {
        SymbolMatch {
            matched: true,
            last_index,
            from_latch: false,
        }
    }

    pub(crate) fn latched(last_index: usize) -> Self {
        SymbolMatch {
            matched: true,
            last_index,
            from_latch: true,
        }
    }
}

/// One configured sign convention plus its scan state.
///
/// Construct through [`SymbolSpec::new_leading`] and friends, which validate
/// before returning. Clone a spec to give an independent parse its own
/// state.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SymbolSpec {
    position: SymbolPosition,
    leading: Symbols,
    trailing: Symbols,
    state: ScanState,
}

impl SymbolSpec {
    /// Leading sign such as `-` in `-123`.
    pub fn new_leading(chars: &[char]) -> Result<Self> {
        Self::checked(SymbolPosition::Before, chars, &[])
    }

    /// Trailing sign such as `-` in `123-`.
    pub fn new_trailing(chars: &[char]) -> Result<Self> {
        Self::checked(SymbolPosition::After, &[], chars)
    }

    /// Paired sign such as `(` `)` in `(123)`.
    pub fn new_leading_and_trailing(leading: &[char], trailing: &[char]) -> Result<Self> {
        Self::checked(SymbolPosition::BeforeAndAfter, leading, trailing)
    }

    /// [`SymbolSpec::new_leading`] from a string.
    pub fn leading(symbols: &str) -> Result<Self> {
        Self::new_leading(&symbols.chars().collect::<Symbols>())
    }

    /// [`SymbolSpec::new_trailing`] from a string.
    pub fn trailing(symbols: &str) -> Result<Self> {
        Self::new_trailing(&symbols.chars().collect::<Symbols>())
    }

    /// [`SymbolSpec::new_leading_and_trailing`] from strings.
    pub fn leading_and_trailing(leading: &str, trailing: &str) -> Result<Self> {
        Self::new_leading_and_trailing(
            &leading.chars().collect::<Symbols>(),
            &trailing.chars().collect::<Symbols>(),
        )
    }

    /// Assemble a spec without validating it.
    ///
    /// Deserialized or hand-assembled configuration goes through here and
    /// must be checked with [`SymbolSpec::validate`] before use; the engine
    /// re-validates on every search regardless.
    pub fn from_parts(position: SymbolPosition, leading: &[char], trailing: &[char]) -> Self {
        SymbolSpec {
            position,
            leading: Symbols::from_slice(leading),
            trailing: Symbols::from_slice(trailing),
            state: ScanState::default(),
        }
    }

    fn checked(position: SymbolPosition, leading: &[char], trailing: &[char]) -> Result<Self> {
        let spec = Self::from_parts(position, leading, trailing);
        spec.validate()?;
        Ok(spec)
    }

    #[inline]
    pub fn position(&self) -> SymbolPosition {
        self.position
    }

    #[inline]
    pub fn leading_symbols(&self) -> &[char] {
        &self.leading
    }

    #[inline]
    pub fn trailing_symbols(&self) -> &[char] {
        &self.trailing
    }

    /// Snapshot of the processing state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[inline]
    pub fn found_first_numeric_digit(&self) -> bool {
        self.state.found_first_digit
    }

    #[inline]
    pub fn found_leading(&self) -> bool {
        self.state.leading_end.is_some()
    }

    #[inline]
    pub fn found_leading_index(&self) -> Option<usize> {
        self.state.leading_end
    }

    #[inline]
    pub fn found_trailing(&self) -> bool {
        self.state.trailing_end.is_some()
    }

    #[inline]
    pub fn found_trailing_index(&self) -> Option<usize> {
        self.state.trailing_end
    }

    /// Whether every half this spec's position requires has latched.
    pub fn found_symbols(&self) -> bool {
        match self.position {
            SymbolPosition::None => false,
            SymbolPosition::Before => self.found_leading(),
            SymbolPosition::After => self.found_trailing(),
            SymbolPosition::BeforeAndAfter => self.found_leading() && self.found_trailing(),
        }
    }

    /// Check the position against the configured symbols.
    ///
    /// Read-only: neither success nor failure touches the spec.
    pub fn validate(&self) -> Result<()> {
        let result = if self.position == SymbolPosition::None {
            Err(SymbolError::configuration(
                "position",
                "position is None; expected Before, After or BeforeAndAfter",
            ))
        } else {
            self.check_half("leading_symbols", &self.leading, self.position.has_leading())
                .and_then(|()| {
                    self.check_half(
                        "trailing_symbols",
                        &self.trailing,
                        self.position.has_trailing(),
                    )
                })
        };
        if let Err(err) = &result {
            debug!(position = %self.position, error = %err, "symbol spec rejected");
        }
        result
    }

    /// A required half must hold valid symbols; an unused half must be empty.
    fn check_half(&self, field: &'static str, symbols: &[char], required: bool) -> Result<()> {
        if required {
            validate_symbols(field, symbols)
        } else if symbols.is_empty() {
            Ok(())
        } else {
            Err(SymbolError::configuration(
                field,
                format!("must be empty when position is {}", self.position),
            ))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Clear the gate and both latches for a fresh parse.
    pub fn reset_processing_state(&mut self) {
        self.state = ScanState::default();
    }

    /// Report whether the outer parser has consumed a digit.
    ///
    /// The gate only closes. Passing `false` after `true` within the same
    /// parse is ignored.
    pub fn set_found_first_numeric_digit(&mut self, found: bool) {
        if found {
            if !self.state.found_first_digit {
                trace!("digit gate closed");
            }
            self.state.found_first_digit = true;
        } else if self.state.found_first_digit {
            trace!("ignoring attempt to reopen digit gate");
        }
    }

    /// Try the leading symbols at `index`.
    pub fn match_leading_at(&mut self, buffer: &[char], index: usize) -> SymbolMatch {
        if self.state.found_first_digit {
            trace!(index, "leading match refused: digit already seen");
            return SymbolMatch::miss(index);
        }
        if let Some(end) = self.state.leading_end {
            return SymbolMatch::latched(end);
        }
        match match_symbols_at(&self.leading, buffer, index) {
            Some(end) => {
                debug!(index, end, "leading sign matched");
                self.state.leading_end = Some(end);
                SymbolMatch::hit(end)
            }
            None => SymbolMatch::miss(index),
        }
    }

    /// Try the trailing symbols at `index`. The digit gate does not apply.
    pub fn match_trailing_at(&mut self, buffer: &[char], index: usize) -> SymbolMatch {
        if let Some(end) = self.state.trailing_end {
            return SymbolMatch::latched(end);
        }
        match match_symbols_at(&self.trailing, buffer, index) {
            Some(end) => {
                debug!(index, end, "trailing sign matched");
                self.state.trailing_end = Some(end);
                SymbolMatch::hit(end)
            }
            None => SymbolMatch::miss(index),
        }
    }
}

/// Parameter listing used in diagnostics.
impl fmt::Display for SymbolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SymbolSpec")?;
        writeln!(f, "  position:            {}", self.position)?;
        writeln!(f, "  leading_symbols:     {}", quoted(&self.leading))?;
        writeln!(f, "  trailing_symbols:    {}", quoted(&self.trailing))?;
        writeln!(f, "  found_first_digit:   {}", self.state.found_first_digit)?;
        writeln!(f, "  found_leading_index: {}", OptIndex(self.state.leading_end))?;
        write!(f, "  found_trailing_index: {}", OptIndex(self.state.trailing_end))
    }
}

struct OptIndex(Option<usize>);

impl fmt::Display for OptIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{index}"),
            None => f.write_str("none"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests;
