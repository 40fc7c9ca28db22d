use anyhow::Result;
use datamint_core::config::MarketConfig;
use datamint_core::metadata::form::{PublishForm, PublishType};
use datamint_core::metadata::model::{CanonicalMetadata, ServiceType};
use datamint_core::metadata::transform::{transform, TransformContext};
use datamint_publish::drafts::DraftStore;
use datamint_publish::{Clock, SystemClock};
use serde::Serialize;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOut {
    pub publish_type: PublishType,
    pub service_type: ServiceType,
    pub metadata: CanonicalMetadata,
}

pub fn run(store: &DraftStore, form: Option<&str>, kind: Option<&str>) -> Result<()> {
    let form = input::resolve_form(store, form, kind)?;
    let ctx = TransformContext::new(SystemClock.now(), &MarketConfig::default())?;
    let metadata = transform(&form, &ctx)?;
    let service_type = match &form {
        PublishForm::Dataset(f) => ServiceType::for_dataset(f.access),
        PublishForm::Algorithm(f) => ServiceType::for_algorithm(f.algorithm_privacy),
    };
    output::print(&TransformOut {
        publish_type: form.publish_type(),
        service_type,
        metadata,
    })
}
