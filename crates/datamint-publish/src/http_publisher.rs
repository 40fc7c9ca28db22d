//! JSON publish endpoint adapter.
//!
//! Posts the [`PublishRequest`] as JSON. A 2xx body of `{ "id": ... }` is a
//! published asset, `{ "error": ... }` an out-of-band failure, and an empty
//! or `null` body means nothing was created. Non-2xx responses and transport
//! failures raise.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::collaborators::{PublishRequest, PublishResponse, PublishedAsset, Publisher};
use crate::config::{parse_http_url, ClientConfig};
use crate::errors::PublishError;

pub struct HttpPublisher {
    endpoint: String,
    client: Client,
}

impl HttpPublisher {
    pub fn new(cfg: &ClientConfig) -> Result<Self, PublishError> {
        let endpoint = cfg
            .publish_endpoint
            .as_deref()
            .ok_or_else(|| PublishError::Config("publish endpoint not configured".to_string()))?;
        Ok(Self {
            endpoint: parse_http_url("publish endpoint", endpoint)?.to_string(),
            client: cfg.http_client()?,
        })
    }
}

/// Interpret a 2xx publish response body.
pub fn interpret_publish_body(body: &Value) -> PublishResponse {
    let error = body
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);
    let asset = body
        .get("id")
        .and_then(Value::as_str)
        .map(|id| PublishedAsset { id: id.to_string() });
    PublishResponse { asset, error }
}

fn error_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("error")
        .or_else(|| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, request: PublishRequest) -> Result<PublishResponse, PublishError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Submission(format!("publish request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PublishError::Submission(format!("failed to read publish response: {e}")))?;
        debug!(%status, bytes = text.len(), "publish endpoint responded");

        if !status.is_success() {
            let msg = error_message(&text)
                .unwrap_or_else(|| format!("publish endpoint returned status {status}"));
            return Err(PublishError::Submission(msg));
        }

        if text.trim().is_empty() {
            return Ok(PublishResponse::empty());
        }
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| PublishError::Submission(format!("invalid publish response: {e}")))?;
        Ok(interpret_publish_body(&body))
    }
}
