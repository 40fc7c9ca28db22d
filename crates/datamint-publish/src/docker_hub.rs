//! Docker-hub proxy adapter.
//!
//! The proxy takes `POST { "image", "tag" }` and answers with a JSON body
//! whose `status` is `"success"` when the pair exists. Anything else,
//! including transport failures, counts as "not found" so the user is sent
//! back to the image field instead of seeing a hard error.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::collaborators::DockerImageValidator;
use crate::config::{parse_http_url, ClientConfig};
use crate::errors::PublishError;

#[derive(Debug, Serialize)]
struct ImageLookup<'a> {
    image: &'a str,
    tag: &'a str,
}

pub struct HttpDockerImageValidator {
    url: String,
    client: Client,
}

impl HttpDockerImageValidator {
    pub fn new(cfg: &ClientConfig) -> Result<Self, PublishError> {
        let url = parse_http_url("docker proxy", &cfg.docker_proxy_url)?;
        Ok(Self {
            url: url.to_string(),
            client: cfg.http_client()?,
        })
    }
}

/// True when the proxy body reports a successful lookup.
pub fn proxy_accepts(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some("success")
}

#[async_trait]
impl DockerImageValidator for HttpDockerImageValidator {
    async fn validate(&self, image: &str, tag: &str) -> bool {
        if image.trim().is_empty() || tag.trim().is_empty() {
            return false;
        }
        let response = match self
            .client
            .post(&self.url)
            .json(&ImageLookup { image, tag })
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "connection to docker hub failed");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, image, tag, "docker hub proxy returned error status");
            return false;
        }

        match response.json::<Value>().await {
            Ok(body) => {
                let ok = proxy_accepts(&body);
                debug!(image, tag, ok, "docker image lookup");
                ok
            }
            Err(e) => {
                error!(error = %e, "invalid docker hub proxy response");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_success_status_is_accepted() {
        assert!(proxy_accepts(&json!({ "status": "success", "result": {} })));
        assert!(!proxy_accepts(&json!({ "status": "error" })));
        assert!(!proxy_accepts(&json!({})));
        assert!(!proxy_accepts(&Value::Null));
    }

    #[tokio::test]
    async fn blank_image_is_rejected_without_a_request() {
        let cfg = ClientConfig {
            docker_proxy_url: "http://127.0.0.1:9".to_string(),
            ..ClientConfig::default()
        };
        let v = HttpDockerImageValidator::new(&cfg).unwrap();
        assert!(!v.validate(" ", "latest").await);
    }

    #[tokio::test]
    async fn unreachable_proxy_yields_false() {
        let cfg = ClientConfig {
            docker_proxy_url: "http://127.0.0.1:9".to_string(),
            connect_timeout_ms: 200,
            request_timeout_ms: 500,
            ..ClientConfig::default()
        };
        let v = HttpDockerImageValidator::new(&cfg).unwrap();
        assert!(!v.validate("acme/solver", "1.0").await);
    }
}
