use std::fmt;

/// Error codes for all number-symbol diagnostics.
///
/// Format: E#### where the first digit indicates the category:
/// - E0xxx: Configuration errors (malformed specs, empty collections)
/// - E1xxx: State errors (a required object was not supplied)
/// - E2xxx: Range errors (bad start index)
/// - E3xxx: Digit errors (non-digit pushed into a kernel)
/// - E4xxx: Kernel consistency errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Configuration Errors (E0xxx)
    /// Malformed symbol or separator specification
    E0001,
    /// Empty specification collection
    E0002,

    // State Errors (E1xxx)
    /// Required object reference not supplied
    E1001,

    // Range Errors (E2xxx)
    /// Negative start index
    E2001,

    // Digit Errors (E3xxx)
    /// Character outside `'0'..='9'`
    E3001,

    // Kernel Errors (E4xxx)
    /// Digit content contradicts sign or non-zero flag
    E4001,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E4001 => "E4001",
        }
    }

    /// Check if this is a configuration error (E0xxx range).
    pub fn is_configuration_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a state error (E1xxx range).
    pub fn is_state_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a range error (E2xxx range).
    pub fn is_range_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a digit error (E3xxx range).
    pub fn is_digit_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Check if this is a kernel consistency error (E4xxx range).
    pub fn is_kernel_error(&self) -> bool {
        self.as_str().starts_with("E4")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
