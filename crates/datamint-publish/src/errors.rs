//! Publish-side error taxonomy.

use datamint_core::DatamintError;
use thiserror::Error;

use crate::report::FormField;

#[derive(Debug, Error)]
pub enum PublishError {
    /// User-correctable input problem.
    #[error("validation failed: {message}")]
    Validation {
        field: Option<FormField>,
        message: String,
    },

    /// Metadata shaping failed; nothing was submitted.
    #[error("transform failed: {0}")]
    Transform(#[from] DatamintError),

    /// The publish call raised or returned nothing usable.
    #[error("submission failed: {0}")]
    Submission(String),

    /// A remote service could not be reached or answered unexpectedly.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Draft persistence failed.
    #[error("draft storage error: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PublishError {
    /// The message without the kind prefix, suitable for showing verbatim.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Transform(e) => e.to_string(),
            Self::Submission(m) | Self::Unavailable(m) | Self::Storage(m) | Self::Config(m) => {
                m.clone()
            }
        }
    }
}
