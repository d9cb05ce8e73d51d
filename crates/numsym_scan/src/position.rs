//! Where a symbol sits relative to the numeric digits.

use std::fmt;

/// Configured placement of a sign convention.
///
/// Declared once when a [`SymbolSpec`](crate::SymbolSpec) is built and never
/// changed afterwards.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolPosition {
    /// Not configured. Never valid.
    #[default]
    None,
    /// Leading sign, e.g. `-123`.
    Before,
    /// Trailing sign, e.g. `123-`.
    After,
    /// Paired sign, e.g. `(123)`.
    BeforeAndAfter,
}

impl SymbolPosition {
    /// Whether this position needs leading symbols.
    pub fn has_leading(self) -> bool {
        matches!(self, SymbolPosition::Before | SymbolPosition::BeforeAndAfter)
    }

    /// Whether this position needs trailing symbols.
    pub fn has_trailing(self) -> bool {
        matches!(self, SymbolPosition::After | SymbolPosition::BeforeAndAfter)
    }
}

impl fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolPosition::None => "None",
            SymbolPosition::Before => "Before",
            SymbolPosition::After => "After",
            SymbolPosition::BeforeAndAfter => "BeforeAndAfter",
        };
        f.write_str(name)
    }
}

/// Where a matched symbol was found relative to the digits of the number.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolLocation {
    /// Before the first digit (leading sign, or a decimal separator as in `.5`).
    Before,
    /// Between digits (decimal or grouping separator).
    Interior,
    /// After the digits (trailing sign).
    After,
}
