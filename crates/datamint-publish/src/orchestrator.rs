//! Submission state machine.
//!
//! ```text
//! Idle -> Validating -> Transforming -> Submitting -> Succeeded
//!              |              |              |
//!              +--------------+--------------+----> Failed
//! ```
//!
//! A restricted account never leaves `Idle`: [`PublishOrchestrator::submit`]
//! refuses with [`SubmissionBlocked`] before any collaborator is called.
//! Every other failure is folded into the returned [`SubmissionReport`], so a
//! failed attempt never crashes the caller and leaves the submitted form
//! untouched for correction. Callers must not run two submissions for the
//! same form concurrently.

use std::sync::Arc;

use datamint_core::config::MarketConfig;
use datamint_core::metadata::form::{PublishForm, PublishType};
use datamint_core::metadata::model::{CanonicalMetadata, ServiceType};
use datamint_core::metadata::transform::{transform, TransformContext};
use datamint_core::DatamintError;
use tracing::{debug, error, info, warn};

use crate::collaborators::{Clock, DockerImageValidator, PublishRequest, Publisher, SystemClock};
use crate::report::{
    success_message, AccountStanding, FailureKind, FormField, PublishOutcome, SubmissionBlocked,
    SubmissionReport, SubmissionState, UiDirective, PUBLISH_FAILED_FALLBACK,
};

pub struct PublishOrchestrator {
    publisher: Arc<dyn Publisher>,
    images: Arc<dyn DockerImageValidator>,
    clock: Arc<dyn Clock>,
    market: MarketConfig,
}

impl PublishOrchestrator {
    pub fn new(
        publisher: Arc<dyn Publisher>,
        images: Arc<dyn DockerImageValidator>,
        market: MarketConfig,
    ) -> Self {
        Self {
            publisher,
            images,
            clock: Arc::new(SystemClock),
            market,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run one submission to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionBlocked`] when the account is restricted. All
    /// other failures are reported through [`SubmissionReport::outcome`].
    pub async fn submit(
        &self,
        standing: &AccountStanding,
        form: PublishForm,
    ) -> Result<SubmissionReport, SubmissionBlocked> {
        if let AccountStanding::Restricted { reason } = standing {
            warn!(reason = %reason, "publish refused: account in purgatory");
            return Err(SubmissionBlocked {
                reason: reason.clone(),
            });
        }

        let mut run = Run::new(form.publish_type());

        run.enter(SubmissionState::Validating);
        if let PublishForm::Algorithm(algo) = &form {
            if algo.docker_image.requires_registry_check() {
                run.step(format!(
                    "Checking docker image {}:{}",
                    algo.image, algo.container_tag
                ));
                if !self.images.validate(&algo.image, &algo.container_tag).await {
                    warn!(image = %algo.image, tag = %algo.container_tag, "docker image rejected");
                    return Ok(run.fail(
                        form,
                        FailureKind::Validation,
                        "Could not fetch docker hub image info. Please check image name and tag and try again.",
                        Some(FormField::Image),
                    ));
                }
            }
        }

        run.enter(SubmissionState::Transforming);
        run.step("Preparing metadata");
        let metadata = match self.transform(&form) {
            Ok(md) => md,
            Err(e) => {
                error!(error = %e, "metadata transform failed");
                let (kind, field) = match e {
                    DatamintError::InvalidTimeout(_) => {
                        (FailureKind::Validation, Some(FormField::Timeout))
                    }
                    _ => (FailureKind::Transform, None),
                };
                return Ok(run.fail(form, kind, e.to_string(), field));
            }
        };

        run.enter(SubmissionState::Submitting);
        let request = build_request(&form, metadata);
        info!(
            publish_type = %run.publish_type,
            service_type = request.service_type.as_str(),
            timeout = request.timeout,
            provider_uri = %request.provider_uri,
            "publishing asset"
        );
        run.step(format!(
            "Publishing {} with {} service",
            run.publish_type,
            request.service_type.as_str()
        ));

        let response = match self.publisher.publish(request).await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "publish call raised");
                return Ok(run.fail(form, FailureKind::Submission, e.message(), None));
            }
        };

        if let Some(signal) = response.error.filter(|s| !s.is_empty()) {
            error!(error = %signal, "publish reported an error");
            return Ok(run.fail(form, FailureKind::Submission, signal, None));
        }

        match response.asset.filter(|a| !a.id.is_empty()) {
            Some(asset) => {
                info!(asset_id = %asset.id, "asset published");
                Ok(run.succeed(asset.id))
            }
            None => {
                error!("{PUBLISH_FAILED_FALLBACK}");
                Ok(run.fail(form, FailureKind::Submission, PUBLISH_FAILED_FALLBACK, None))
            }
        }
    }

    fn transform(&self, form: &PublishForm) -> Result<CanonicalMetadata, DatamintError> {
        let ctx = TransformContext::new(self.clock.now(), &self.market)?;
        transform(form, &ctx)
    }
}

/// Assemble the publish call arguments for the active variant.
pub fn build_request(form: &PublishForm, metadata: CanonicalMetadata) -> PublishRequest {
    let service_type = match form {
        PublishForm::Dataset(f) => ServiceType::for_dataset(f.access),
        PublishForm::Algorithm(f) => ServiceType::for_algorithm(f.algorithm_privacy),
    };
    PublishRequest {
        timeout: metadata.timeout,
        metadata,
        service_type,
        datatoken_options: form.datatoken_options().clone().or_access_token(),
        provider_uri: form.provider_uri().to_string(),
    }
}

/// Bookkeeping for one attempt.
struct Run {
    publish_type: PublishType,
    state: SubmissionState,
    transitions: Vec<SubmissionState>,
    steps: Vec<String>,
}

impl Run {
    fn new(publish_type: PublishType) -> Self {
        Self {
            publish_type,
            state: SubmissionState::Idle,
            transitions: vec![SubmissionState::Idle],
            steps: Vec::new(),
        }
    }

    fn enter(&mut self, state: SubmissionState) {
        debug!(from = ?self.state, to = ?state, "submission state");
        self.state = state;
        self.transitions.push(state);
    }

    fn step(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(step = %text);
        self.steps.push(text);
    }

    fn fail(
        mut self,
        form: PublishForm,
        kind: FailureKind,
        message: impl Into<String>,
        field: Option<FormField>,
    ) -> SubmissionReport {
        self.enter(SubmissionState::Failed);
        let directives = field
            .map(|field| vec![UiDirective::FocusField { field }])
            .unwrap_or_default();
        SubmissionReport {
            publish_type: self.publish_type,
            title: self.publish_type.title().to_string(),
            state: self.state,
            transitions: self.transitions,
            steps: self.steps,
            outcome: PublishOutcome::Failure {
                kind,
                message: message.into(),
                field,
            },
            success_message: None,
            directives,
            next_form: form,
        }
    }

    fn succeed(mut self, asset_id: String) -> SubmissionReport {
        self.enter(SubmissionState::Succeeded);
        SubmissionReport {
            publish_type: self.publish_type,
            title: self.publish_type.title().to_string(),
            state: self.state,
            transitions: self.transitions,
            steps: self.steps,
            outcome: PublishOutcome::Success { asset_id },
            success_message: Some(success_message(self.publish_type).to_string()),
            directives: vec![UiDirective::ResetForm, UiDirective::ScrollToTop],
            next_form: PublishForm::defaults(self.publish_type),
        }
    }
}
