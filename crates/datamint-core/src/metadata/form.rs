//! Publish-form model.
//!
//! A submission is exactly one of two variants, selected by the
//! `publishType` discriminator. Field names on the wire are camelCase so
//! drafts written by the form layer deserialize unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DatamintError, DatamintResult};

pub use crate::metadata::docker::DockerImageChoice;

/// How buyers get at a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessType {
    #[default]
    Download,
    Compute,
}

/// Submission variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishType {
    Dataset,
    Algorithm,
}

impl PublishType {
    pub fn parse(s: &str) -> DatamintResult<Self> {
        match s {
            "dataset" => Ok(Self::Dataset),
            "algorithm" => Ok(Self::Algorithm),
            _ => Err(DatamintError::invalid_argument(format!(
                "unknown publish type: {s}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Algorithm => "algorithm",
        }
    }

    /// Heading shown while a submission of this type is in progress.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dataset => "Publishing Data Set",
            Self::Algorithm => "Publishing Algorithm",
        }
    }
}

impl fmt::Display for PublishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file reference attached to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<String>,
}

impl FileEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Name and symbol of the datatoken minted alongside the asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatatokenOptions {
    pub name: String,
    pub symbol: String,
}

impl DatatokenOptions {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Fixed identity used when names are not randomized.
    pub fn access_token() -> Self {
        Self::new("Access Token", "GXAT")
    }

    /// True when every field is empty, i.e. nothing was generated yet.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.symbol.is_empty()
    }

    /// Fill in the default identity if nothing was generated yet.
    pub fn or_access_token(self) -> Self {
        if self.name.is_empty() {
            Self::access_token()
        } else {
            self
        }
    }
}

/// Dataset variant of the publish form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetForm {
    pub name: String,
    pub author: String,
    pub description: String,
    pub files: Vec<FileEntry>,
    pub links: Vec<String>,
    /// Comma-separated tag text as typed.
    pub tags: String,
    pub access: AccessType,
    pub timeout: String,
    pub data_token_options: DatatokenOptions,
    pub provider_uri: String,
    pub terms_and_conditions: bool,
}

impl Default for DatasetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            description: String::new(),
            files: Vec::new(),
            links: Vec::new(),
            tags: String::new(),
            access: AccessType::Download,
            timeout: "Forever".to_string(),
            data_token_options: DatatokenOptions::default(),
            provider_uri: String::new(),
            terms_and_conditions: false,
        }
    }
}

/// Algorithm variant of the publish form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlgorithmForm {
    pub name: String,
    pub author: String,
    pub description: String,
    pub files: Vec<FileEntry>,
    pub tags: String,
    pub docker_image: DockerImageChoice,
    pub image: String,
    pub container_tag: String,
    pub entrypoint: String,
    /// Private algorithms are only runnable via compute jobs.
    pub algorithm_privacy: bool,
    pub timeout: String,
    pub data_token_options: DatatokenOptions,
    pub provider_uri: String,
    pub terms_and_conditions: bool,
}

impl Default for AlgorithmForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            description: String::new(),
            files: Vec::new(),
            tags: String::new(),
            docker_image: DockerImageChoice::NodeLatest,
            image: "node".to_string(),
            container_tag: "latest".to_string(),
            entrypoint: "node $ALGO".to_string(),
            algorithm_privacy: false,
            timeout: "Forever".to_string(),
            data_token_options: DatatokenOptions::default(),
            provider_uri: String::new(),
            terms_and_conditions: false,
        }
    }
}

/// One submission, tagged by `publishType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "publishType", rename_all = "lowercase")]
pub enum PublishForm {
    Dataset(DatasetForm),
    Algorithm(AlgorithmForm),
}

impl PublishForm {
    /// Schema defaults for the given variant.
    pub fn defaults(publish_type: PublishType) -> Self {
        match publish_type {
            PublishType::Dataset => Self::Dataset(DatasetForm::default()),
            PublishType::Algorithm => Self::Algorithm(AlgorithmForm::default()),
        }
    }

    pub fn publish_type(&self) -> PublishType {
        match self {
            Self::Dataset(_) => PublishType::Dataset,
            Self::Algorithm(_) => PublishType::Algorithm,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Dataset(f) => &f.name,
            Self::Algorithm(f) => &f.name,
        }
    }

    pub fn timeout(&self) -> &str {
        match self {
            Self::Dataset(f) => &f.timeout,
            Self::Algorithm(f) => &f.timeout,
        }
    }

    pub fn provider_uri(&self) -> &str {
        match self {
            Self::Dataset(f) => &f.provider_uri,
            Self::Algorithm(f) => &f.provider_uri,
        }
    }

    pub fn datatoken_options(&self) -> &DatatokenOptions {
        match self {
            Self::Dataset(f) => &f.data_token_options,
            Self::Algorithm(f) => &f.data_token_options,
        }
    }
}

/// Drafts of both variants share one datatoken identity: the variant with
/// empty options inherits the other's. Algorithm drafts take precedence as
/// the receiving side.
pub fn share_datatoken_options(dataset: &mut DatasetForm, algorithm: &mut AlgorithmForm) {
    if algorithm.data_token_options.is_empty() {
        algorithm.data_token_options = dataset.data_token_options.clone();
    } else if dataset.data_token_options.is_empty() {
        dataset.data_token_options = algorithm.data_token_options.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_variant_round_trips() {
        let form = PublishForm::Algorithm(AlgorithmForm {
            name: "Branin".to_string(),
            docker_image: DockerImageChoice::Custom,
            ..AlgorithmForm::default()
        });
        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v["publishType"], "algorithm");
        assert_eq!(v["dockerImage"], "custom image");
        let back: PublishForm = serde_json::from_value(v).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn partial_draft_fills_defaults() {
        let form: PublishForm = serde_json::from_str(
            r#"{"publishType":"dataset","name":"Weather","access":"Compute"}"#,
        )
        .unwrap();
        let PublishForm::Dataset(ds) = form else {
            panic!("expected dataset");
        };
        assert_eq!(ds.name, "Weather");
        assert_eq!(ds.access, AccessType::Compute);
        assert_eq!(ds.timeout, "Forever");
    }

    #[test]
    fn empty_algorithm_options_inherit_dataset_options() {
        let mut ds = DatasetForm {
            data_token_options: DatatokenOptions::new("Foo Token", "FOO-1"),
            ..DatasetForm::default()
        };
        let mut algo = AlgorithmForm::default();
        share_datatoken_options(&mut ds, &mut algo);
        assert_eq!(algo.data_token_options, ds.data_token_options);
    }

    #[test]
    fn empty_dataset_options_inherit_algorithm_options() {
        let mut ds = DatasetForm::default();
        let mut algo = AlgorithmForm {
            data_token_options: DatatokenOptions::new("Bar Token", "BAR-2"),
            ..AlgorithmForm::default()
        };
        share_datatoken_options(&mut ds, &mut algo);
        assert_eq!(ds.data_token_options.symbol, "BAR-2");
    }

    #[test]
    fn access_token_fills_blank_options() {
        assert_eq!(
            DatatokenOptions::default().or_access_token(),
            DatatokenOptions::access_token()
        );
        let named = DatatokenOptions::new("X", "Y");
        assert_eq!(named.clone().or_access_token(), named);
    }

    #[test]
    fn parse_publish_type() {
        assert_eq!(PublishType::parse("algorithm").unwrap(), PublishType::Algorithm);
        assert!(PublishType::parse("model").is_err());
    }
}
