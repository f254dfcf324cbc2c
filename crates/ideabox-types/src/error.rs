//! Domain error for rejected input.

use std::fmt;

/// Input the domain refuses: a blank required field or an unparsable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    /// Human-readable error message.
    pub message: String,
}

impl DomainError {
    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DomainError {}
