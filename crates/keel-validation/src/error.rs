use thiserror::Error;

/// Descriptive failure produced when a message violates one of its
/// invariants.
///
/// A single kind carrying only a human-readable message: callers surface it
/// to whoever submitted the offending message rather than branch on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable description of the failed invariant.
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type ValidationResult = Result<(), ValidationError>;
