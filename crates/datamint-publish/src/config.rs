//! Client configuration for the publish layer.
//!
//! Explicit values only; the CLI maps flags onto this struct.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::PublishError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Docker-hub proxy answering `{ image, tag }` lookups.
    pub docker_proxy_url: String,
    /// Purgatory API base URL.
    pub purgatory_url: String,
    /// JSON endpoint performing the publish call.
    pub publish_endpoint: Option<String>,
    /// Prefix for draft keys (`<prefix>-form-datasets`).
    pub draft_prefix: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            docker_proxy_url: "https://dockerhub-proxy.oceanprotocol.com".to_string(),
            purgatory_url: "https://market-purgatory.oceanprotocol.com/api".to_string(),
            publish_endpoint: None,
            draft_prefix: "datamint-publish".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), PublishError> {
        parse_http_url("docker proxy", &self.docker_proxy_url)?;
        parse_http_url("purgatory", &self.purgatory_url)?;
        if let Some(endpoint) = &self.publish_endpoint {
            parse_http_url("publish endpoint", endpoint)?;
        }
        if self.draft_prefix.trim().is_empty() {
            return Err(PublishError::Config("draft prefix must not be empty".to_string()));
        }
        if self.connect_timeout_ms == 0 || self.request_timeout_ms == 0 {
            return Err(PublishError::Config("timeouts must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// HTTP client with the configured connect/request timeouts.
    pub fn http_client(&self) -> Result<Client, PublishError> {
        Client::builder()
            .connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .timeout(Duration::from_millis(self.request_timeout_ms))
            .build()
            .map_err(|e| PublishError::Unavailable(format!("failed to build http client: {e}")))
    }
}

pub(crate) fn parse_http_url(what: &str, raw: &str) -> Result<Url, PublishError> {
    let url = Url::parse(raw).map_err(|e| PublishError::Config(format!("invalid {what} url {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PublishError::Config(format!(
            "{what} url must be http(s), got scheme {other:?}"
        ))),
    }
}
