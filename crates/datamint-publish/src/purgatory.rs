//! Purgatory API adapter.
//!
//! `GET <base>/account?address=<addr>` returns an empty body, `[]`, `{}` or a
//! record `{ "address", "reason" }` (possibly wrapped in an array) for
//! restricted accounts.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::collaborators::PurgatoryCheck;
use crate::config::{parse_http_url, ClientConfig};
use crate::errors::PublishError;
use crate::report::AccountStanding;

pub struct HttpPurgatoryCheck {
    base: Url,
    client: Client,
}

impl HttpPurgatoryCheck {
    pub fn new(cfg: &ClientConfig) -> Result<Self, PublishError> {
        Ok(Self {
            base: parse_http_url("purgatory", &cfg.purgatory_url)?,
            client: cfg.http_client()?,
        })
    }

    fn account_url(&self, address: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/account", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url.query_pairs_mut().clear().append_pair("address", address);
        url
    }
}

/// Interpret a purgatory response body for `address`.
pub fn standing_from_body(address: &str, body: &Value) -> AccountStanding {
    let record = match body {
        Value::Array(items) => items.iter().find(|item| matches_address(address, item)),
        Value::Object(_) if matches_address(address, body) => Some(body),
        _ => None,
    };
    match record {
        Some(r) => AccountStanding::Restricted {
            reason: r
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or("account is in purgatory")
                .to_string(),
        },
        None => AccountStanding::Clear,
    }
}

fn matches_address(address: &str, record: &Value) -> bool {
    record
        .get("address")
        .and_then(Value::as_str)
        .is_some_and(|a| a.eq_ignore_ascii_case(address))
}

#[async_trait]
impl PurgatoryCheck for HttpPurgatoryCheck {
    async fn standing(&self, address: &str) -> Result<AccountStanding, PublishError> {
        let url = self.account_url(address);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PublishError::Unavailable(format!("purgatory lookup failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Unavailable(format!(
                "purgatory lookup failed: status {status}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PublishError::Unavailable(format!("purgatory lookup failed: {e}")))?;
        if text.trim().is_empty() {
            return Ok(AccountStanding::Clear);
        }
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| PublishError::Unavailable(format!("invalid purgatory response: {e}")))?;

        let standing = standing_from_body(address, &body);
        if standing.is_restricted() {
            warn!(address, "account is in purgatory");
        } else {
            info!(address, "account standing clear");
        }
        Ok(standing)
    }
}

/// Purgatory check for callers that have no purgatory service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPurgatory;

#[async_trait]
impl PurgatoryCheck for NoPurgatory {
    async fn standing(&self, _address: &str) -> Result<AccountStanding, PublishError> {
        Ok(AccountStanding::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use serde_json::json;

    const ADDR: &str = "0xAbC0000000000000000000000000000000000001";

    #[test]
    fn empty_bodies_are_clear() {
        assert_eq!(standing_from_body(ADDR, &json!([])), AccountStanding::Clear);
        assert_eq!(standing_from_body(ADDR, &json!({})), AccountStanding::Clear);
        assert_eq!(standing_from_body(ADDR, &Value::Null), AccountStanding::Clear);
    }

    #[test]
    fn matching_record_is_restricted() {
        let body = json!([{ "address": ADDR.to_lowercase(), "reason": "phishing" }]);
        assert_eq!(
            standing_from_body(ADDR, &body),
            AccountStanding::Restricted {
                reason: "phishing".to_string()
            }
        );
    }

    #[test]
    fn record_for_other_address_is_clear() {
        let body = json!({ "address": "0x01", "reason": "spam" });
        assert_eq!(standing_from_body(ADDR, &body), AccountStanding::Clear);
    }

    fn check_for(base: String) -> HttpPurgatoryCheck {
        HttpPurgatoryCheck::new(&ClientConfig {
            purgatory_url: base,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn empty_response_body_is_clear() {
        let base = serve_once("200 OK", "").await;
        let standing = check_for(base).standing(ADDR).await.unwrap();
        assert_eq!(standing, AccountStanding::Clear);
    }

    #[tokio::test]
    async fn restricted_record_from_server() {
        let base = serve_once(
            "200 OK",
            r#"{"address":"0xabc0000000000000000000000000000000000001","reason":"phishing"}"#,
        )
        .await;
        let standing = check_for(base).standing(ADDR).await.unwrap();
        assert!(standing.is_restricted());
    }

    #[tokio::test]
    async fn error_status_is_unavailable() {
        let base = serve_once("503 Service Unavailable", "").await;
        let err = check_for(base).standing(ADDR).await.unwrap_err();
        assert!(matches!(err, PublishError::Unavailable(_)));
    }

    #[test]
    fn account_url_appends_path_and_query() {
        let check = HttpPurgatoryCheck::new(&ClientConfig::default()).unwrap();
        assert_eq!(
            check.account_url("0x01").as_str(),
            "https://market-purgatory.oceanprotocol.com/api/account?address=0x01"
        );
    }
}
