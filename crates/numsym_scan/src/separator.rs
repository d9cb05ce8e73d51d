//! Decimal and integer-grouping separator configuration.
//!
//! Separators never carry a digit gate of their own: the engine decides
//! from the caller's `found_first_digit` flag whether a separator can
//! appear at all and where it sits relative to the digits.

use numsym_diagnostic::{Result, SymbolError};
use tracing::{debug, trace};

use crate::chars::{match_symbols_at, validate_symbols, Symbols};

/// Ceiling on grouping sizes and repetition counts.
///
/// Not a domain limit. Values past it indicate corrupt configuration that
/// would send a downstream formatter into a runaway loop.
pub const MAX_GROUPING_VALUE: u32 = 10_000_000;

/// Radix point such as `.` in `1.5` or `,` in `1,5`.
///
/// Latches on the first match: a number string carries at most one
/// decimal separator, so a second one is never reported.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DecimalSeparatorSpec {
    chars: Symbols,
    found_end: Option<usize>,
}

impl DecimalSeparatorSpec {
    pub fn new(chars: &[char]) -> Result<Self> {
        let spec = Self::from_parts(chars);
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_text(symbols: &str) -> Result<Self> {
        Self::new(&symbols.chars().collect::<Symbols>())
    }

    /// Assemble without validating.
    pub fn from_parts(chars: &[char]) -> Self {
        DecimalSeparatorSpec {
            chars: Symbols::from_slice(chars),
            found_end: None,
        }
    }

    /// `.` as used in the United States.
    pub fn us() -> Self {
        Self::from_parts(&['.'])
    }

    /// `,` as used across most of the European Union.
    pub fn european() -> Self {
        Self::from_parts(&[','])
    }

    /// `,` as used in France.
    pub fn france() -> Self {
        Self::from_parts(&[','])
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Last buffer index of the separator found in this parse.
    #[inline]
    pub fn found_index(&self) -> Option<usize> {
        self.found_end
    }

    pub fn validate(&self) -> Result<()> {
        validate_symbols("decimal_separator", &self.chars)
    }

    pub fn reset_processing_state(&mut self) {
        self.found_end = None;
    }

    /// Compare the separator against `buffer[index..]`.
    ///
    /// Returns `None` once a separator has already been found in this parse.
    pub fn match_at(&mut self, buffer: &[char], index: usize) -> Option<usize> {
        if let Some(end) = self.found_end {
            trace!(index, end, "decimal separator found on previous search");
            return None;
        }
        let end = match_symbols_at(&self.chars, buffer, index)?;
        debug!(index, end, "decimal separator matched");
        self.found_end = Some(end);
        Some(end)
    }
}

/// One grouping rule: `chars` every `group_size` digits, `repetitions`
/// times (0 = unlimited).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct IntegerGroupingSpec {
    chars: Symbols,
    group_size: u32,
    repetitions: u32,
    restart_sequence: bool,
}

impl IntegerGroupingSpec {
    pub fn new(
        chars: &[char],
        group_size: u32,
        repetitions: u32,
        restart_sequence: bool,
    ) -> Result<Self> {
        let spec = Self::from_parts(chars, group_size, repetitions, restart_sequence);
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_parts(
        chars: &[char],
        group_size: u32,
        repetitions: u32,
        restart_sequence: bool,
    ) -> Self {
        IntegerGroupingSpec {
            chars: Symbols::from_slice(chars),
            group_size,
            repetitions,
            restart_sequence,
        }
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// 0 means the rule repeats without limit.
    #[inline]
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    #[inline]
    pub fn restart_sequence(&self) -> bool {
        self.restart_sequence
    }

    pub fn validate(&self) -> Result<()> {
        validate_symbols("integer_separator", &self.chars)?;
        if self.group_size == 0 {
            return Err(SymbolError::configuration(
                "group_size",
                "group size must be at least 1",
            ));
        }
        if self.group_size > MAX_GROUPING_VALUE {
            return Err(SymbolError::configuration(
                "group_size",
                format!(
                    "{} exceeds the maximum of {MAX_GROUPING_VALUE}",
                    self.group_size
                ),
            ));
        }
        if self.repetitions > MAX_GROUPING_VALUE {
            return Err(SymbolError::configuration(
                "repetitions",
                format!(
                    "{} exceeds the maximum of {MAX_GROUPING_VALUE}",
                    self.repetitions
                ),
            ));
        }
        Ok(())
    }

    /// Compare the grouping characters against `buffer[index..]`.
    pub fn match_at(&self, buffer: &[char], index: usize) -> Option<usize> {
        match_symbols_at(&self.chars, buffer, index)
    }
}

/// Ordered grouping rules, applied from the decimal point leftwards.
///
/// India's `12,34,56,789` is a group of 3 followed by unlimited groups of 2.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct IntegerGroupingSequence {
    rules: Vec<IntegerGroupingSpec>,
}

impl IntegerGroupingSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one rule.
    pub fn push(&mut self, rule: IntegerGroupingSpec) -> Result<()> {
        rule.validate().map_err(|err| err.at_member(self.rules.len()))?;
        self.rules.push(rule);
        Ok(())
    }

    /// Unlimited groups of three: `1,234,567`.
    pub fn thousands(chars: &[char]) -> Result<Self> {
        Self::from_rules(vec![IntegerGroupingSpec::from_parts(chars, 3, 0, false)])
    }

    /// One group of three, then unlimited groups of two: `12,34,567`.
    pub fn india(chars: &[char]) -> Result<Self> {
        Self::from_rules(vec![
            IntegerGroupingSpec::from_parts(chars, 3, 1, false),
            IntegerGroupingSpec::from_parts(chars, 2, 0, false),
        ])
    }

    /// Unlimited groups of four: `1,2345,6789`.
    pub fn china(chars: &[char]) -> Result<Self> {
        Self::from_rules(vec![IntegerGroupingSpec::from_parts(chars, 4, 0, false)])
    }

    /// Build from pre-assembled rules, validating each.
    pub fn from_rules(rules: Vec<IntegerGroupingSpec>) -> Result<Self> {
        let sequence = IntegerGroupingSequence { rules };
        sequence.validate()?;
        Ok(sequence)
    }

    #[inline]
    pub fn rules(&self) -> &[IntegerGroupingSpec] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fails on an empty sequence, otherwise on the first invalid rule
    /// tagged with its index.
    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(SymbolError::configuration(
                "integer_grouping",
                "the grouping sequence holds no rules",
            ));
        }
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate().map_err(|err| err.at_member(index))?;
        }
        Ok(())
    }

    /// Try every rule's grouping characters at `index`, first match wins.
    pub fn match_at(&self, buffer: &[char], index: usize) -> Option<usize> {
        self.rules.iter().find_map(|rule| rule.match_at(buffer, index))
    }
}
