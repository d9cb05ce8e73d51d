//! Caller-supplied label trail for error messages.

use std::fmt;

/// Ordered trail of labels describing where an operation was invoked.
///
/// Labels are stored outermost first, so a trail built while an error
/// unwinds reads `outer -> inner`. An empty trail renders as nothing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagContext {
    labels: Vec<String>,
}

impl DiagContext {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail holding a single label.
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            labels: vec![label.into()],
        }
    }

    /// Append an inner label (the callee of everything already recorded).
    #[must_use]
    pub fn child(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Record an outer label (the caller of everything already recorded).
    pub fn prepend(&mut self, label: impl Into<String>) {
        self.labels.insert(0, label.into());
    }

    /// Labels, outermost first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for DiagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
