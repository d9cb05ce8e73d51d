//! The error type shared by every `numsym_*` crate.

use std::fmt;

use crate::{DiagContext, ErrorCode};

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, SymbolError>;

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum SymbolErrorKind {
    /// A symbol or separator specification is malformed.
    #[error("invalid configuration for `{field}`: {reason}")]
    Configuration { field: &'static str, reason: String },

    /// A specification collection holds no members.
    #[error("the collection is empty and holds no sign specifications")]
    EmptyCollection,

    /// A required object was not supplied.
    #[error("required `{what}` was not supplied")]
    MissingReference { what: &'static str },

    /// A search started at a negative index.
    #[error("start index {index} is negative")]
    NegativeIndex { index: isize },

    /// A non-digit character was pushed into a numeric kernel.
    #[error("{ch:?} is not a decimal digit ('0'..='9')")]
    InvalidDigit { ch: char },

    /// Kernel digit content contradicts its sign or non-zero flag.
    #[error("inconsistent kernel state: {invariant}")]
    InconsistentState { invariant: &'static str },
}

impl SymbolErrorKind {
    /// Build a configuration error for `field`.
    pub fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        SymbolErrorKind::Configuration {
            field,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SymbolErrorKind::Configuration { .. } => ErrorCode::E0001,
            SymbolErrorKind::EmptyCollection => ErrorCode::E0002,
            SymbolErrorKind::MissingReference { .. } => ErrorCode::E1001,
            SymbolErrorKind::NegativeIndex { .. } => ErrorCode::E2001,
            SymbolErrorKind::InvalidDigit { .. } => ErrorCode::E3001,
            SymbolErrorKind::InconsistentState { .. } => ErrorCode::E4001,
        }
    }
}

/// A scan, separator, or kernel error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SymbolError {
    /// WHAT went wrong.
    pub kind: SymbolErrorKind,
    /// Position of the failing member when a collection wrapped the error.
    pub member: Option<usize>,
    /// Caller-supplied labels, outermost first.
    pub trail: DiagContext,
}

impl SymbolError {
    pub fn new(kind: SymbolErrorKind) -> Self {
        Self {
            kind,
            member: None,
            trail: DiagContext::new(),
        }
    }

    /// Shorthand for `SymbolError::new(SymbolErrorKind::configuration(..))`.
    pub fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(SymbolErrorKind::configuration(field, reason))
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Tag the error with the collection position it came from.
    ///
    /// The innermost position wins; re-wrapping keeps the first index.
    #[must_use]
    pub fn at_member(mut self, index: usize) -> Self {
        if self.member.is_none() {
            self.member = Some(index);
        }
        self
    }

    /// Record an outer diagnostic label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.trail.prepend(label);
        self
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, SymbolErrorKind::Configuration { .. })
    }
}

impl From<SymbolErrorKind> for SymbolError {
    fn from(kind: SymbolErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.code())?;
        if !self.trail.is_empty() {
            write!(f, "{}: ", self.trail)?;
        }
        if let Some(index) = self.member {
            write!(f, "member {index}: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for SymbolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Attach diagnostic labels to a failing [`Result`].
pub trait WithContext<T> {
    /// Prepend `label` to the error trail. No effect on `Ok`.
    fn context(self, label: impl Into<String>) -> Result<T>;
}

impl<T> WithContext<T> for Result<T> {
    fn context(self, label: impl Into<String>) -> Result<T> {
        self.map_err(|err| err.with_label(label))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests;
