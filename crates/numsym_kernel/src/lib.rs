//! Minimal numeric kernel fed by an outer number-string parser.
//!
//! The parser pushes digits as it consumes them and supplies the sign it
//! derived from whichever sign convention matched. The kernel only checks
//! that digits, sign and the non-zero flag agree; it never infers a sign.

mod kernel;
mod sign;

pub use kernel::NumericKernel;
pub use sign::{NumericSign, NumericValueType};
