//! Digit accumulator with sign-consistency validation.

use std::fmt;

use numsym_diagnostic::{Result, SymbolError, SymbolErrorKind};
use tracing::{debug, trace};

use crate::{NumericSign, NumericValueType};

/// Integer and fractional digits of one parsed number, plus its sign.
///
/// # Invariants
///
/// Checked by [`NumericKernel::validate`]:
/// - at least one digit is stored
/// - fractional digits require integer digits (`.5` is pushed as `0.5`)
/// - every stored character is `'0'..='9'`
/// - `is_non_zero` is true iff some stored digit is not `'0'`
/// - a non-zero value never carries [`NumericSign::Zero`]
///
/// The add methods keep the character and flag invariants by construction.
/// Deserialized kernels are not trusted and must be validated.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericKernel {
    integer_digits: String,
    fractional_digits: String,
    sign: NumericSign,
    is_non_zero: bool,
    value_type: NumericValueType,
}

impl NumericKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a kernel from digit strings and validate it.
    pub fn from_digits(integer: &str, fractional: &str, sign: NumericSign) -> Result<Self> {
        let mut kernel = Self::new();
        for ch in integer.chars() {
            kernel.add_integer_digit(ch)?;
        }
        for ch in fractional.chars() {
            kernel.add_fractional_digit(ch)?;
        }
        kernel.set_sign(sign);
        kernel.validate()?;
        Ok(kernel)
    }

    pub fn add_integer_digit(&mut self, digit: char) -> Result<()> {
        check_digit(digit)?;
        self.integer_digits.push(digit);
        if self.fractional_digits.is_empty() {
            self.value_type = NumericValueType::Integer;
        }
        self.note_digit(digit);
        Ok(())
    }

    pub fn add_fractional_digit(&mut self, digit: char) -> Result<()> {
        check_digit(digit)?;
        self.fractional_digits.push(digit);
        self.value_type = NumericValueType::FloatingPoint;
        self.note_digit(digit);
        Ok(())
    }

    fn note_digit(&mut self, digit: char) {
        if digit != '0' && !self.is_non_zero {
            trace!(digit = %digit, "kernel value became non-zero");
            self.is_non_zero = true;
        }
    }

    pub fn set_sign(&mut self, sign: NumericSign) {
        self.sign = sign;
    }

    #[inline]
    pub fn sign(&self) -> NumericSign {
        self.sign
    }

    #[inline]
    pub fn is_non_zero(&self) -> bool {
        self.is_non_zero
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.is_non_zero
    }

    #[inline]
    pub fn value_type(&self) -> NumericValueType {
        self.value_type
    }

    pub fn integer_digit_count(&self) -> usize {
        self.integer_digits.chars().count()
    }

    pub fn fractional_digit_count(&self) -> usize {
        self.fractional_digits.chars().count()
    }

    #[inline]
    pub fn integer_str(&self) -> &str {
        &self.integer_digits
    }

    #[inline]
    pub fn fractional_str(&self) -> &str {
        &self.fractional_digits
    }

    /// Drop all digits and reset the sign for reuse.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every invariant listed on [`NumericKernel`]. Read-only.
    pub fn validate(&self) -> Result<()> {
        let failed = if self.integer_digits.is_empty() && self.fractional_digits.is_empty() {
            Some("the kernel holds no digits")
        } else if self.integer_digits.is_empty() {
            Some("fractional digits require at least one integer digit")
        } else if !self
            .integer_digits
            .chars()
            .chain(self.fractional_digits.chars())
            .all(|c| c.is_ascii_digit())
        {
            Some("every stored digit must be '0'..='9'")
        } else if self.is_non_zero != self.has_non_zero_digit() {
            Some("the non-zero flag disagrees with the stored digits")
        } else if self.is_non_zero && self.sign == NumericSign::Zero {
            Some("a non-zero value cannot carry a zero sign")
        } else {
            None
        };
        match failed {
            Some(invariant) => {
                debug!(invariant, "kernel validation failed");
                Err(SymbolErrorKind::InconsistentState { invariant }.into())
            }
            None => Ok(()),
        }
    }

    fn has_non_zero_digit(&self) -> bool {
        self.integer_digits
            .chars()
            .chain(self.fractional_digits.chars())
            .any(|c| c != '0')
    }
}

fn check_digit(digit: char) -> Result<()> {
    if digit.is_ascii_digit() {
        Ok(())
    } else {
        Err(SymbolError::new(SymbolErrorKind::InvalidDigit { ch: digit }))
    }
}

/// Native number string, e.g. `-1234.56`. An empty kernel renders as `0`.
impl fmt::Display for NumericKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == NumericSign::Negative {
            f.write_str("-")?;
        }
        if self.integer_digits.is_empty() {
            f.write_str("0")?;
        } else {
            f.write_str(&self.integer_digits)?;
        }
        if !self.fractional_digits.is_empty() {
            write!(f, ".{}", self.fractional_digits)?;
        }
        Ok(())
    }
}
