use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use datamint_core::config::MarketConfig;
use datamint_publish::docker_hub::HttpDockerImageValidator;
use datamint_publish::drafts::DraftStore;
use datamint_publish::http_publisher::HttpPublisher;
use datamint_publish::purgatory::{HttpPurgatoryCheck, NoPurgatory};
use datamint_publish::{
    asset_link, ClientConfig, FailureKind, PublishError, PublishOrchestrator, PublishOutcome,
    PurgatoryCheck, SubmissionReport,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::debug;

use crate::io::input;
use crate::output;

pub struct PublishArgs {
    pub form: Option<String>,
    pub kind: Option<String>,
    pub account: String,
    pub endpoint: String,
    pub docker_proxy: Option<String>,
    pub purgatory: Option<String>,
    pub skip_purgatory: bool,
    pub draft_prefix: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOut {
    #[serde(flatten)]
    pub report: SubmissionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn client_config(args: &PublishArgs) -> Result<ClientConfig> {
    let mut cfg = ClientConfig {
        publish_endpoint: Some(args.endpoint.clone()),
        draft_prefix: args.draft_prefix.clone(),
        ..ClientConfig::default()
    };
    if let Some(proxy) = &args.docker_proxy {
        cfg.docker_proxy_url = proxy.clone();
    }
    if let Some(purgatory) = &args.purgatory {
        cfg.purgatory_url = purgatory.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

pub async fn run(store: &DraftStore, args: PublishArgs) -> Result<()> {
    let cfg = client_config(&args)?;
    let form = input::resolve_form(store, args.form.as_deref(), args.kind.as_deref())?;
    let publish_type = form.publish_type();

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").map_err(|e| anyhow!("{e}"))?);
    pb.enable_steady_tick(Duration::from_millis(80));

    pb.set_message("checking account standing");
    let purgatory: Box<dyn PurgatoryCheck> = if args.skip_purgatory {
        Box::new(NoPurgatory)
    } else {
        Box::new(HttpPurgatoryCheck::new(&cfg)?)
    };
    let standing = match purgatory.standing(&args.account).await {
        Ok(s) => s,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message(publish_type.title());
    let orchestrator = PublishOrchestrator::new(
        Arc::new(HttpPublisher::new(&cfg)?),
        Arc::new(HttpDockerImageValidator::new(&cfg)?),
        MarketConfig::default(),
    );
    let result = orchestrator.submit(&standing, form).await;
    pb.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(blocked) => {
            output::status(false, &blocked.to_string());
            bail!("publishing is disabled for {}", args.account);
        }
    };

    for step in &report.steps {
        debug!(step = %step);
    }

    match report.outcome.clone() {
        PublishOutcome::Success { asset_id } => {
            store.reset(publish_type)?;
            let (label, href) = asset_link(publish_type, &asset_id);
            if let Some(msg) = &report.success_message {
                output::status(true, msg);
            }
            output::print(&PublishOut {
                link: Some(format!("{label} {href}")),
                report,
            })
        }
        PublishOutcome::Failure {
            kind,
            message,
            field,
        } => {
            let err = match kind {
                FailureKind::Validation => PublishError::Validation { field, message },
                FailureKind::Transform | FailureKind::Submission => PublishError::Submission(message),
            };
            store.save(&report.next_form)?;
            output::print(&PublishOut { report, link: None })?;
            output::status(false, &err.message());
            Err(err.into())
        }
    }
}
