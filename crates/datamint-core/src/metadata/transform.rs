//! Form -> canonical metadata transformation.
//!
//! Pure and deterministic: the creation timestamp and license come in through
//! [`TransformContext`], never from the system clock. Forms are expected to
//! be schema-validated by the form layer; the only failures here are unknown
//! timeout labels and custom containers without an image reference.

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::config::MarketConfig;
use crate::errors::{DatamintError, DatamintResult};
use crate::metadata::docker::ContainerSpec;
use crate::metadata::form::{AlgorithmForm, DatasetForm, FileEntry, PublishForm};
use crate::metadata::model::{
    AdditionalInformation, AlgorithmComponent, AssetType, CanonicalMetadata, MetadataMain,
};
use crate::metadata::timeout::map_timeout;

/// Caller-supplied values the transform must not compute itself.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// ISO-8601 UTC timestamp without fractional seconds.
    pub date_created: String,
    pub license: String,
}

impl TransformContext {
    pub fn new(now: OffsetDateTime, cfg: &MarketConfig) -> DatamintResult<Self> {
        Ok(Self {
            date_created: iso8601_no_millis(now)?,
            license: cfg.license.clone(),
        })
    }
}

/// Format `t` in UTC with whole seconds, e.g. `2023-11-14T22:13:20Z`.
pub fn iso8601_no_millis(t: OffsetDateTime) -> DatamintResult<String> {
    let t = t
        .to_offset(UtcOffset::UTC)
        .replace_nanosecond(0)
        .map_err(|e| DatamintError::invariant(format!("timestamp out of range: {e}")))?;
    t.format(&Rfc3339)
        .map_err(|e| DatamintError::serialization(format!("failed to format timestamp: {e}")))
}

/// Split comma-separated tag text into slugs.
pub fn transform_tags(tags: &str) -> Vec<String> {
    tags.split(',').filter_map(slugify).collect()
}

fn slugify(tag: &str) -> Option<String> {
    let mut out = String::new();
    let mut pending_dash = false;
    for c in tag.trim().chars() {
        if c.is_whitespace() {
            pending_dash = !out.is_empty();
            continue;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if pending_dash && c != '-' && !out.ends_with('-') {
                out.push('-');
            }
            pending_dash = false;
            // One dash per separator run, whether typed or from whitespace.
            if c == '-' && out.ends_with('-') {
                continue;
            }
            out.push(c);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Algorithm language, taken from the extension of the first file URL.
pub fn algorithm_language(files: &[FileEntry]) -> String {
    let Some(first) = files.first() else {
        return String::new();
    };
    let path = first.url.split(['?', '#']).next().unwrap_or_default();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_string(),
        _ => String::new(),
    }
}

pub fn transform_dataset(form: &DatasetForm, ctx: &TransformContext) -> DatamintResult<CanonicalMetadata> {
    let timeout = map_timeout(&form.timeout)?;

    Ok(CanonicalMetadata {
        main: MetadataMain {
            asset_type: AssetType::Dataset,
            name: form.name.clone(),
            author: form.author.clone(),
            date_created: ctx.date_created.clone(),
            date_published: String::new(),
            files: form.files.clone(),
            license: ctx.license.clone(),
            algorithm: None,
        },
        additional_information: AdditionalInformation {
            description: form.description.clone(),
            tags: transform_tags(&form.tags),
            links: form.links.clone(),
            terms_and_conditions: form.terms_and_conditions,
        },
        timeout,
    })
}

/// Container for the algorithm: presets win over whatever the form holds.
pub fn resolve_container(form: &AlgorithmForm) -> DatamintResult<ContainerSpec> {
    if let Some(preset) = form.docker_image.preset() {
        return Ok(preset);
    }
    if form.image.trim().is_empty() || form.container_tag.trim().is_empty() {
        return Err(DatamintError::invalid_argument(
            "custom image requires both image and tag",
        ));
    }
    Ok(ContainerSpec {
        entrypoint: form.entrypoint.clone(),
        image: form.image.trim().to_string(),
        tag: form.container_tag.trim().to_string(),
    })
}

pub fn transform_algorithm(form: &AlgorithmForm, ctx: &TransformContext) -> DatamintResult<CanonicalMetadata> {
    let timeout = map_timeout(&form.timeout)?;
    let container = resolve_container(form)?;

    Ok(CanonicalMetadata {
        main: MetadataMain {
            asset_type: AssetType::Algorithm,
            name: form.name.clone(),
            author: form.author.clone(),
            date_created: ctx.date_created.clone(),
            date_published: String::new(),
            files: form.files.clone(),
            license: ctx.license.clone(),
            algorithm: Some(AlgorithmComponent::docker(
                algorithm_language(&form.files),
                container,
            )),
        },
        additional_information: AdditionalInformation {
            description: form.description.clone(),
            tags: transform_tags(&form.tags),
            links: Vec::new(),
            terms_and_conditions: form.terms_and_conditions,
        },
        timeout,
    })
}

/// Dispatch on the active variant.
pub fn transform(form: &PublishForm, ctx: &TransformContext) -> DatamintResult<CanonicalMetadata> {
    match form {
        PublishForm::Dataset(f) => transform_dataset(f, ctx),
        PublishForm::Algorithm(f) => transform_algorithm(f, ctx),
    }
}
