//! Stateless search entry points.
//!
//! Each function checks its inputs in a fixed order before matching:
//!
//! 1. record the caller's digit flag on the spec
//! 2. empty buffer: configuration error
//! 3. negative start index: range error
//! 4. start index at or past the end: end-of-buffer result, not an error
//! 5. spec validation, propagated unchanged
//!
//! All mutable state lives in the spec passed in; the functions themselves
//! hold none.

use numsym_diagnostic::{Result, SymbolError, SymbolErrorKind};
use tracing::trace;

use crate::{
    DecimalSeparatorSpec, IntegerGroupingSequence, ScanResult, SymbolLocation, SymbolPosition,
    SymbolSpec,
};

/// Resolved start of a search.
pub(crate) enum Start {
    At(usize),
    EndOfBuffer(usize),
}

/// Buffer and start-index checks shared by every search entry point.
pub(crate) fn resolve_start(buffer: &[char], start_index: isize) -> Result<Start> {
    if buffer.is_empty() {
        return Err(SymbolError::configuration(
            "buffer",
            "the search buffer is empty; nothing to search",
        ));
    }
    let Ok(start) = usize::try_from(start_index) else {
        return Err(SymbolErrorKind::NegativeIndex { index: start_index }.into());
    };
    if start >= buffer.len() {
        trace!(start, len = buffer.len(), "search started at end of buffer");
        return Ok(Start::EndOfBuffer(start));
    }
    Ok(Start::At(start))
}

/// Ask whether `spec` has a sign symbol starting at `start_index`.
///
/// `found_first_digit` reports whether the outer parser has consumed a
/// digit before `start_index`. Leading halves are only tried while no digit
/// has been seen, trailing halves only once one has. A paired spec tries its
/// trailing half only after its leading half has latched; an unpaired
/// closing symbol is not a match.
pub fn search_for_symbol(
    spec: &mut SymbolSpec,
    buffer: &[char],
    start_index: isize,
    found_first_digit: bool,
) -> Result<ScanResult> {
    spec.set_found_first_numeric_digit(found_first_digit);
    let start = match resolve_start(buffer, start_index)? {
        Start::At(start) => start,
        Start::EndOfBuffer(start) => return Ok(ScanResult::end_of_buffer(start)),
    };
    spec.validate()?;

    let gate_closed = spec.found_first_numeric_digit();
    let result = match spec.position() {
        SymbolPosition::Before => ScanResult::from_match(
            start,
            spec.match_leading_at(buffer, start),
            SymbolLocation::Before,
        ),
        SymbolPosition::After if !gate_closed => {
            trace!(start, "trailing sign skipped: no digit seen yet");
            ScanResult::no_match(start)
        }
        SymbolPosition::After => ScanResult::from_match(
            start,
            spec.match_trailing_at(buffer, start),
            SymbolLocation::After,
        ),
        SymbolPosition::BeforeAndAfter if !gate_closed => ScanResult::from_match(
            start,
            spec.match_leading_at(buffer, start),
            SymbolLocation::Before,
        ),
        SymbolPosition::BeforeAndAfter if spec.found_leading() => ScanResult::from_match(
            start,
            spec.match_trailing_at(buffer, start),
            SymbolLocation::After,
        ),
        SymbolPosition::BeforeAndAfter => {
            trace!(start, "paired trailing half skipped: leading half never matched");
            ScanResult::no_match(start)
        }
        // Rejected by validate() above.
        SymbolPosition::None => {
            return Err(SymbolError::configuration("position", "position is None"));
        }
    };
    Ok(result)
}

/// Ask whether the decimal separator starts at `start_index`.
///
/// The location is [`SymbolLocation::Before`] when no digit has been seen
/// (`.5`), [`SymbolLocation::Interior`] otherwise. After the first match
/// the separator latches and later calls report no match.
pub fn search_for_decimal_separator(
    spec: &mut DecimalSeparatorSpec,
    buffer: &[char],
    start_index: isize,
    found_first_digit: bool,
) -> Result<ScanResult> {
    let start = match resolve_start(buffer, start_index)? {
        Start::At(start) => start,
        Start::EndOfBuffer(start) => return Ok(ScanResult::end_of_buffer(start)),
    };
    spec.validate()?;

    let Some(end) = spec.match_at(buffer, start) else {
        return Ok(ScanResult::no_match(start));
    };
    let location = if found_first_digit {
        SymbolLocation::Interior
    } else {
        SymbolLocation::Before
    };
    Ok(ScanResult {
        matched: true,
        consumed_index: Some(end),
        location: Some(location),
        ..ScanResult::no_match(start)
    })
}

/// Ask whether an integer-grouping separator starts at `start_index`.
///
/// Grouping separators only occur between digits, so nothing matches
/// before the first digit.
pub fn search_for_group_separator(
    sequence: &IntegerGroupingSequence,
    buffer: &[char],
    start_index: isize,
    found_first_digit: bool,
) -> Result<ScanResult> {
    let start = match resolve_start(buffer, start_index)? {
        Start::At(start) => start,
        Start::EndOfBuffer(start) => return Ok(ScanResult::end_of_buffer(start)),
    };
    sequence.validate()?;

    if !found_first_digit {
        return Ok(ScanResult::no_match(start));
    }
    let Some(end) = sequence.match_at(buffer, start) else {
        return Ok(ScanResult::no_match(start));
    };
    Ok(ScanResult {
        matched: true,
        consumed_index: Some(end),
        location: Some(SymbolLocation::Interior),
        ..ScanResult::no_match(start)
    })
}
