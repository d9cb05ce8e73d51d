//! Locale-aware symbol search for number strings.
//!
//! Re-exports the scan engine, the numeric kernel and the diagnostics so
//! callers depend on one crate:
//!
//! ```text
//! let mut symbols = LocaleProfile::united_states().build()?;
//! let buffer = ScanBuffer::new("(4,654.00)");
//! let open = symbols.signs.search_in(buffer.as_chars(), 0, false)?;
//! ```
//!
//! The outer parser drives the search: it owns the cursor, pushes digits
//! into a [`NumericKernel`], and tells every search whether a digit has
//! been consumed yet.

pub use numsym_diagnostic::{
    DiagContext, ErrorCode, Result, SymbolError, SymbolErrorKind, WithContext,
};
pub use numsym_kernel::{NumericKernel, NumericSign, NumericValueType};
pub use numsym_scan::{
    engine, search_for_decimal_separator, search_for_group_separator, search_for_symbol,
    DecimalSeparatorSpec, GroupingRule, IntegerGroupingSequence, IntegerGroupingSpec,
    LocaleProfile, NumberSymbols, ScanBuffer, ScanCursor, ScanResult, ScanState, SignConvention,
    SpecCollection, SymbolLocation, SymbolMatch, SymbolPosition, SymbolSpec, MAX_GROUPING_VALUE,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=numsym_scan=trace` to follow gate and latch decisions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
