//! Submission states, outcomes and the report handed back to the UI layer.

use std::fmt;

use datamint_core::metadata::form::{PublishForm, PublishType};
use serde::Serialize;

/// Generic message when the publish call yields neither an id nor an error.
pub const PUBLISH_FAILED_FALLBACK: &str = "Publishing DDO failed.";

/// States of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Validating,
    Transforming,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Whether the UI must keep resubmission disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Transforming | Self::Submitting)
    }
}

/// Form fields the UI may be asked to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Image,
    Timeout,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Timeout => "timeout",
        })
    }
}

/// Failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Validation,
    Transform,
    Submission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum PublishOutcome {
    Success {
        asset_id: String,
    },
    Failure {
        kind: FailureKind,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<FormField>,
    },
}

impl PublishOutcome {
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            Self::Success { asset_id } => Some(asset_id),
            Self::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Side effects delegated to the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UiDirective {
    /// Replace form state with schema defaults.
    ResetForm,
    /// Move the user's attention to the top of the view.
    ScrollToTop,
    /// Bring a specific field into view.
    FocusField { field: FormField },
}

/// Everything the caller needs to render feedback after one attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub publish_type: PublishType,
    pub title: String,
    pub state: SubmissionState,
    /// Every state entered, starting with `Idle`.
    pub transitions: Vec<SubmissionState>,
    /// Human-readable progress narrative.
    pub steps: Vec<String>,
    pub outcome: PublishOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    pub directives: Vec<UiDirective>,
    /// Form state after the attempt: defaults on success, the submitted
    /// values untouched on failure.
    pub next_form: PublishForm,
}

impl SubmissionReport {
    pub fn reached(&self, state: SubmissionState) -> bool {
        self.transitions.contains(&state)
    }
}

/// Whether the acting account may publish at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "standing", rename_all = "lowercase")]
pub enum AccountStanding {
    Clear,
    Restricted { reason: String },
}

impl AccountStanding {
    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Restricted { .. })
    }
}

/// Refusal to start a submission for a restricted account. No state machine
/// was entered and no collaborator was called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("account is in purgatory: {reason}")]
pub struct SubmissionBlocked {
    pub reason: String,
}

/// Success wording per variant.
pub fn success_message(publish_type: PublishType) -> &'static str {
    match publish_type {
        PublishType::Dataset => "🎉 Successfully published. 🎉 Now create a price on your data set.",
        PublishType::Algorithm => "🎉 Successfully published. 🎉 Now create a price for your algorithm.",
    }
}

/// Link target for the "Go to ..." action after success.
pub fn asset_link(publish_type: PublishType, asset_id: &str) -> (String, String) {
    let label = match publish_type {
        PublishType::Dataset => "Go to data set →",
        PublishType::Algorithm => "Go to algorithm →",
    };
    (label.to_string(), format!("/asset/{asset_id}"))
}
