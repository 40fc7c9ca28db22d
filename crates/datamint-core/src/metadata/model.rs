//! Canonical asset metadata.
//!
//! This is the schema-conformant description handed to the publish call.
//! `timeout` is always a whole number of seconds; `0` means no expiry.

use serde::{Deserialize, Serialize};

use crate::metadata::docker::ContainerSpec;
use crate::metadata::form::{AccessType, FileEntry};

/// Asset kind recorded in `main.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Dataset,
    Algorithm,
}

/// Service offered for the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Access,
    Compute,
}

impl ServiceType {
    pub fn for_dataset(access: AccessType) -> Self {
        match access {
            AccessType::Download => Self::Access,
            AccessType::Compute => Self::Compute,
        }
    }

    pub fn for_algorithm(private: bool) -> Self {
        if private {
            Self::Compute
        } else {
            Self::Access
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Compute => "compute",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalMetadata {
    pub main: MetadataMain,
    pub additional_information: AdditionalInformation,
    /// Access timeout in seconds.
    pub timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataMain {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub name: String,
    pub author: String,
    /// ISO-8601 UTC, whole seconds.
    pub date_created: String,
    /// Empty until the asset is anchored.
    pub date_published: String,
    pub files: Vec<FileEntry>,
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInformation {
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    pub terms_and_conditions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComponent {
    pub language: String,
    pub format: String,
    pub version: String,
    pub container: ContainerSpec,
}

impl AlgorithmComponent {
    pub fn docker(language: impl Into<String>, container: ContainerSpec) -> Self {
        Self {
            language: language.into(),
            format: "docker-image".to_string(),
            version: "0.1".to_string(),
            container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_mapping() {
        assert_eq!(ServiceType::for_dataset(AccessType::Download), ServiceType::Access);
        assert_eq!(ServiceType::for_dataset(AccessType::Compute), ServiceType::Compute);
        assert_eq!(ServiceType::for_algorithm(true), ServiceType::Compute);
        assert_eq!(ServiceType::for_algorithm(false), ServiceType::Access);
        assert_eq!(serde_json::to_value(ServiceType::Compute).unwrap(), "compute");
    }
}
