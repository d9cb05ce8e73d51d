//! Diagnostics for number-symbol scanning.
//!
//! Every fallible operation in the `numsym_*` crates returns a
//! [`SymbolError`]. An error carries:
//! - WHAT: a [`SymbolErrorKind`] describing the failure
//! - a stable [`ErrorCode`] for searchability
//! - an optional collection member index, set when a collection wraps a
//!   member failure
//! - a [`DiagContext`] label trail supplied by callers
//!
//! The label trail only enriches messages. It never changes control flow.
//!
//! ```text
//! let spec = SymbolSpec::leading("").context("load locale")?;
//! // [E0001] load locale: invalid configuration for `leading_symbols`: ...
//! ```

mod context;
mod error;
mod error_code;

pub use context::DiagContext;
pub use error::{Result, SymbolError, SymbolErrorKind, WithContext};
pub use error_code::ErrorCode;
