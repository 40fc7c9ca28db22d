//! Collaborator interfaces used by the orchestrator.
//!
//! Every network-bound dependency sits behind a trait so the state machine
//! can run against in-memory fakes in tests.

use async_trait::async_trait;
use datamint_core::metadata::form::DatatokenOptions;
use datamint_core::metadata::model::{CanonicalMetadata, ServiceType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::PublishError;
use crate::report::AccountStanding;

/// Arguments of the external publish call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub metadata: CanonicalMetadata,
    pub service_type: ServiceType,
    pub datatoken_options: DatatokenOptions,
    pub timeout: u64,
    pub provider_uri: String,
}

/// Asset created by a successful publish call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedAsset {
    pub id: String,
}

/// Result of the publish call that did not raise.
///
/// `asset` may be absent, and `error` carries an out-of-band failure
/// signal reported next to (or instead of) a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    #[serde(default)]
    pub asset: Option<PublishedAsset>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PublishResponse {
    pub fn published(id: impl Into<String>) -> Self {
        Self {
            asset: Some(PublishedAsset { id: id.into() }),
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            asset: None,
            error: Some(error.into()),
        }
    }
}

/// Broadcasts the asset (metadata + datatoken) to the network.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// # Errors
    ///
    /// Returns [`PublishError`] when the call raises; its message is shown
    /// to the user verbatim.
    async fn publish(&self, request: PublishRequest) -> Result<PublishResponse, PublishError>;
}

/// Confirms that an image:tag pair exists in a container registry.
#[async_trait]
pub trait DockerImageValidator: Send + Sync {
    /// `false` blocks the submission; lookup failures also yield `false`.
    async fn validate(&self, image: &str, tag: &str) -> bool;
}

/// Looks up whether an account is restricted from publishing.
#[async_trait]
pub trait PurgatoryCheck: Send + Sync {
    async fn standing(&self, address: &str) -> Result<AccountStanding, PublishError>;
}

/// Time source for `dateCreated`.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Registry check that accepts every image, for offline use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllImages;

#[async_trait]
impl DockerImageValidator for AcceptAllImages {
    async fn validate(&self, _image: &str, _tag: &str) -> bool {
        true
    }
}
