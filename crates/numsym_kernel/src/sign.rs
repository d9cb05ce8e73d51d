use std::fmt;

/// Sign of a parsed value, supplied by the outer parser.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericSign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl fmt::Display for NumericSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericSign::Negative => "Negative",
            NumericSign::Zero => "Zero",
            NumericSign::Positive => "Positive",
        })
    }
}

/// Whether the kernel holds an integer or a floating-point value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericValueType {
    /// No digits yet.
    #[default]
    None,
    Integer,
    FloatingPoint,
}
