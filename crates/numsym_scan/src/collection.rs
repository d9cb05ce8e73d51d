//! Ordered, first-match-wins list of sign conventions.

use numsym_diagnostic::{Result, SymbolError, SymbolErrorKind};
use tracing::{debug, trace};

use crate::engine::{resolve_start, search_for_symbol, Start};
use crate::{ScanBuffer, ScanResult, SymbolSpec};

/// Sign conventions tried in insertion order.
///
/// Insertion order is priority order. When several conventions could match
/// the same text, the earliest one wins and later members are not tried in
/// that call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpecCollection {
    specs: Vec<SymbolSpec>,
    target: Option<ScanBuffer>,
}

impl SpecCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leading `-`, then paired `(` `)`.
    pub fn united_states() -> Result<Self> {
        let mut collection = Self::new();
        collection.add_leading("-")?;
        collection.add_leading_and_trailing("(", ")")?;
        Ok(collection)
    }

    /// Validate `spec` and append it. A rejected spec is not added.
    pub fn add(&mut self, spec: SymbolSpec) -> Result<()> {
        spec.validate()?;
        self.specs.push(spec);
        Ok(())
    }

    pub fn add_leading(&mut self, symbols: &str) -> Result<()> {
        self.add(SymbolSpec::leading(symbols)?)
    }

    pub fn add_trailing(&mut self, symbols: &str) -> Result<()> {
        self.add(SymbolSpec::trailing(symbols)?)
    }

    pub fn add_leading_and_trailing(&mut self, leading: &str, trailing: &str) -> Result<()> {
        self.add(SymbolSpec::leading_and_trailing(leading, trailing)?)
    }

    /// Fails on an empty collection, otherwise with the first invalid
    /// member's error tagged by its index.
    pub fn validate(&self) -> Result<()> {
        if self.specs.is_empty() {
            return Err(SymbolErrorKind::EmptyCollection.into());
        }
        for (index, spec) in self.specs.iter().enumerate() {
            spec.validate().map_err(|err| err.at_member(index))?;
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SymbolSpec> {
        self.specs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolSpec> {
        self.specs.iter()
    }

    /// Reset every member for a fresh parse. The target is kept.
    pub fn reset_processing_state(&mut self) {
        for spec in &mut self.specs {
            spec.reset_processing_state();
        }
    }

    /// Attach the number string later [`SpecCollection::search`] calls scan.
    ///
    /// A new target starts a new parse, so member state is reset.
    pub fn set_target(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(SymbolError::configuration(
                "target",
                "the target search string is empty",
            ));
        }
        self.target = Some(ScanBuffer::new(text));
        self.reset_processing_state();
        Ok(())
    }

    pub fn target(&self) -> Option<&ScanBuffer> {
        self.target.as_ref()
    }

    /// Run the priority search over the attached target.
    pub fn search(&mut self, start_index: isize, found_first_digit: bool) -> Result<ScanResult> {
        let Some(target) = &self.target else {
            return Err(SymbolErrorKind::MissingReference {
                what: "target search string",
            }
            .into());
        };
        search_members(&mut self.specs, target.as_chars(), start_index, found_first_digit)
    }

    /// Run the priority search over a caller-owned buffer.
    pub fn search_in(
        &mut self,
        buffer: &[char],
        start_index: isize,
        found_first_digit: bool,
    ) -> Result<ScanResult> {
        search_members(&mut self.specs, buffer, start_index, found_first_digit)
    }

    /// Index of the first member whose required halves have all latched.
    pub fn found_symbols(&self) -> Option<usize> {
        self.specs.iter().position(SymbolSpec::found_symbols)
    }
}

fn search_members(
    specs: &mut [SymbolSpec],
    buffer: &[char],
    start_index: isize,
    found_first_digit: bool,
) -> Result<ScanResult> {
    if specs.is_empty() {
        return Err(SymbolErrorKind::EmptyCollection.into());
    }
    for spec in specs.iter_mut() {
        spec.set_found_first_numeric_digit(found_first_digit);
    }
    // Buffer and index errors belong to the call, not to any member.
    let start = match resolve_start(buffer, start_index)? {
        Start::At(start) => start,
        Start::EndOfBuffer(start) => return Ok(ScanResult::end_of_buffer(start)),
    };
    for (index, spec) in specs.iter_mut().enumerate() {
        let result = search_for_symbol(spec, buffer, start_index, found_first_digit)
            .map_err(|err| err.at_member(index))?;
        if result.matched {
            debug!(member = index, start = result.start_index, "collection member matched");
            return Ok(result.with_member(index));
        }
    }
    trace!(start, "no collection member matched");
    Ok(ScanResult::no_match(start))
}

impl<'a> IntoIterator for &'a SpecCollection {
    type Item = &'a SymbolSpec;
    type IntoIter = std::slice::Iter<'a, SymbolSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
