//! Container image choices for algorithm assets.

use serde::{Deserialize, Serialize};

/// Container selection offered by the algorithm form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DockerImageChoice {
    #[default]
    #[serde(rename = "node:latest")]
    NodeLatest,
    #[serde(rename = "python:latest")]
    PythonLatest,
    #[serde(rename = "custom image")]
    Custom,
}

/// Resolved container reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub entrypoint: String,
    pub image: String,
    pub tag: String,
}

impl DockerImageChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NodeLatest => "node:latest",
            Self::PythonLatest => "python:latest",
            Self::Custom => "custom image",
        }
    }

    /// Preset container for the choice; `None` for a custom image.
    pub fn preset(&self) -> Option<ContainerSpec> {
        match self {
            Self::NodeLatest => Some(ContainerSpec {
                entrypoint: "node $ALGO".to_string(),
                image: "node".to_string(),
                tag: "latest".to_string(),
            }),
            Self::PythonLatest => Some(ContainerSpec {
                entrypoint: "python $ALGO".to_string(),
                image: "oceanprotocol/algo_dockers".to_string(),
                tag: "python-branin".to_string(),
            }),
            Self::Custom => None,
        }
    }

    /// Only user-supplied images need a registry lookup before publishing.
    pub fn requires_registry_check(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_custom_needs_registry_check() {
        assert!(DockerImageChoice::Custom.requires_registry_check());
        assert!(!DockerImageChoice::NodeLatest.requires_registry_check());
        assert!(!DockerImageChoice::PythonLatest.requires_registry_check());
    }

    #[test]
    fn serde_uses_form_labels() {
        let v = serde_json::to_value(DockerImageChoice::Custom).unwrap();
        assert_eq!(v, "custom image");
        let c: DockerImageChoice = serde_json::from_str("\"python:latest\"").unwrap();
        assert_eq!(c.preset().unwrap().tag, "python-branin");
    }
}
