//! File-backed form drafts.
//!
//! Each variant is stored under its own key, `<prefix>-form-datasets` or
//! `<prefix>-form-algorithms`, as `{ "initialValues": <form fields> }`. A
//! missing draft loads as schema defaults, and a variant with empty datatoken
//! options takes the other variant's on load. The orchestrator never reads or
//! writes drafts; hosts load one, submit it and reset it on success.

use std::fs;
use std::path::{Path, PathBuf};

use datamint_core::metadata::form::{
    share_datatoken_options, AlgorithmForm, DatasetForm, PublishForm, PublishType,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PublishError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftEnvelope<T> {
    initial_values: T,
}

#[derive(Debug, Clone)]
pub struct DraftStore {
    root: PathBuf,
    prefix: String,
}

impl DraftStore {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Storage key for a variant.
    pub fn key(&self, publish_type: PublishType) -> String {
        match publish_type {
            PublishType::Dataset => format!("{}-form-datasets", self.prefix),
            PublishType::Algorithm => format!("{}-form-algorithms", self.prefix),
        }
    }

    fn path(&self, publish_type: PublishType) -> PathBuf {
        self.root.join(format!("{}.json", self.key(publish_type)))
    }

    fn read<T: DeserializeOwned + Default>(&self, publish_type: PublishType) -> Result<T, PublishError> {
        let path = self.path(publish_type);
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| PublishError::Storage(format!("failed to read {}: {e}", path.display())))?;
        let env: DraftEnvelope<T> = serde_json::from_str(&raw)
            .map_err(|e| PublishError::Storage(format!("invalid draft {}: {e}", path.display())))?;
        Ok(env.initial_values)
    }

    fn write<T: Serialize>(&self, publish_type: PublishType, values: &T) -> Result<(), PublishError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            PublishError::Storage(format!("failed to create {}: {e}", self.root.display()))
        })?;
        let path = self.path(publish_type);
        let bytes = serde_json::to_vec_pretty(&DraftEnvelope {
            initial_values: values,
        })
        .map_err(|e| PublishError::Storage(format!("failed to serialize draft: {e}")))?;
        fs::write(&path, bytes)
            .map_err(|e| PublishError::Storage(format!("failed to write {}: {e}", path.display())))?;
        debug!(path = %path.display(), "draft saved");
        Ok(())
    }

    /// Load one variant, falling back to defaults. Empty datatoken options
    /// are taken from the other variant's draft.
    pub fn load(&self, publish_type: PublishType) -> Result<PublishForm, PublishError> {
        let (dataset, algorithm) = self.load_pair()?;
        Ok(match publish_type {
            PublishType::Dataset => PublishForm::Dataset(dataset),
            PublishType::Algorithm => PublishForm::Algorithm(algorithm),
        })
    }

    /// Load both variants with the shared datatoken identity applied.
    pub fn load_pair(&self) -> Result<(DatasetForm, AlgorithmForm), PublishError> {
        let mut dataset: DatasetForm = self.read(PublishType::Dataset)?;
        let mut algorithm: AlgorithmForm = self.read(PublishType::Algorithm)?;
        share_datatoken_options(&mut dataset, &mut algorithm);
        Ok((dataset, algorithm))
    }

    pub fn save(&self, form: &PublishForm) -> Result<(), PublishError> {
        match form {
            PublishForm::Dataset(f) => self.write(PublishType::Dataset, f),
            PublishForm::Algorithm(f) => self.write(PublishType::Algorithm, f),
        }
    }

    /// Overwrite a variant with schema defaults.
    pub fn reset(&self, publish_type: PublishType) -> Result<(), PublishError> {
        self.save(&PublishForm::defaults(publish_type))
    }
}
