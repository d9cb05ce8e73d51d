//! Locale-aware symbol search over number-string buffers.
//!
//! Recognizes negative-number sign conventions (leading `-123`, trailing
//! `123-`, paired `(123)`), decimal separators, and integer-grouping
//! separators at caller-chosen positions in a character buffer.
//!
//! # Architecture
//!
//! - [`SymbolSpec`]: one sign convention plus its per-parse scan state
//! - [`DecimalSeparatorSpec`], [`IntegerGroupingSpec`]: separator configuration
//! - [`SpecCollection`]: ordered, first-match-wins list of sign conventions
//! - [`engine`]: stateless entry points that drive a spec over a buffer
//! - [`ScanResult`]: what a single search call found
//! - [`LocaleProfile`]: declarative bundle of conventions for one locale
//!
//! The outer parser owns the buffer and the cursor. For every position it
//! asks the engine whether a symbol starts there, telling it whether a
//! numeric digit has already been consumed. Leading signs stop matching
//! once the first digit is seen (the digit gate); every half of a sign
//! convention latches once matched so repeated calls are idempotent.
//!
//! # Concurrency
//!
//! Specs carry mutable scan state for one parse. Hand each concurrent parse
//! its own clone instead of sharing one instance.

mod buffer;
mod chars;
mod collection;
mod cursor;
pub mod engine;
mod position;
mod profile;
mod result;
mod separator;
mod symbol_spec;

pub use buffer::ScanBuffer;
pub use collection::SpecCollection;
pub use cursor::ScanCursor;
pub use engine::{search_for_decimal_separator, search_for_group_separator, search_for_symbol};
pub use position::{SymbolLocation, SymbolPosition};
pub use profile::{GroupingRule, LocaleProfile, NumberSymbols, SignConvention};
pub use result::ScanResult;
pub use separator::{
    DecimalSeparatorSpec, IntegerGroupingSequence, IntegerGroupingSpec, MAX_GROUPING_VALUE,
};
pub use symbol_spec::{ScanState, SymbolMatch, SymbolSpec};
