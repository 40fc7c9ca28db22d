//! Error types for datamint-core.
//!
//! Every fallible operation in the core crate returns [`DatamintResult`].
//! Variants are coarse and stable so that higher layers (orchestrator, CLI)
//! can classify failures without string matching.

use thiserror::Error;

/// Result alias used across the core crate.
pub type DatamintResult<T> = Result<T, DatamintError>;

/// Core error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatamintError {
    /// Caller-supplied value is malformed or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Timeout label is not part of the fixed label table.
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    /// A value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Serialized text could not be transport-encoded or decoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Internal invariant violated.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DatamintError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_timeout(label: impl Into<String>) -> Self {
        Self::InvalidTimeout(label.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Stable short code for diagnostics and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::InvalidTimeout(_) => "invalid_timeout",
            Self::Serialization(_) => "serialization",
            Self::Encoding(_) => "encoding",
            Self::Invariant(_) => "invariant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let e = DatamintError::invalid_timeout("2 days");
        assert_eq!(e.to_string(), "invalid timeout: 2 days");
        assert_eq!(e.code(), "invalid_timeout");
    }
}
