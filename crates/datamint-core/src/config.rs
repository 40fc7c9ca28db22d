//! Configuration structures for datamint-core.
//!
//! This module defines explicit, serializable configuration objects used by
//! higher-level components (orchestrator, CLI) to control marketplace identity
//! constants embedded in NFT metadata and published asset metadata.
//!
//! The core crate itself does not read environment variables. All configuration
//! must be provided explicitly by the caller to preserve determinism.

use serde::{Deserialize, Serialize};

use crate::errors::{DatamintError, DatamintResult};

/// Global configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketConfig {
    pub nft: NftIdentity,
    /// On-chain template selected when creating the NFT contract.
    pub template_index: u32,
    /// License URL stamped into every published asset.
    pub license: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            nft: NftIdentity::default(),
            template_index: 1,
            license: "https://market.oceanprotocol.com/terms".to_string(),
        }
    }
}

/// Fixed marketplace identity carried by every minted NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftIdentity {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub external_url: String,
    /// Six hex digits, no leading `#`.
    pub background_color: String,
}

impl Default for NftIdentity {
    fn default() -> Self {
        Self {
            name: "Ocean Asset v4 NFT".to_string(),
            symbol: "OCEAN-V4-NFT".to_string(),
            description: "This NFT represents an asset in the Ocean Protocol v4 ecosystem."
                .to_string(),
            external_url: "https://market.oceanprotocol.com".to_string(),
            background_color: "141414".to_string(),
        }
    }
}

/// Returns true when `s` is exactly six ASCII hex digits.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &MarketConfig) -> DatamintResult<()> {
    if cfg.nft.name.trim().is_empty() {
        return Err(DatamintError::invalid_argument("nft name must not be empty"));
    }

    if cfg.nft.symbol.trim().is_empty() {
        return Err(DatamintError::invalid_argument(
            "nft symbol must not be empty",
        ));
    }

    if !is_hex_color(&cfg.nft.background_color) {
        return Err(DatamintError::invalid_argument(format!(
            "background color must be six hex digits without '#', got {:?}",
            cfg.nft.background_color
        )));
    }

    if cfg.template_index == 0 {
        return Err(DatamintError::invalid_argument(
            "template index must be greater than zero",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MarketConfig::default();
        validate_config(&cfg).unwrap();
        assert_eq!(cfg.template_index, 1);
    }

    #[test]
    fn hash_prefixed_color_rejected() {
        let mut cfg = MarketConfig::default();
        cfg.nft.background_color = "#14141".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn empty_symbol_detected() {
        let mut cfg = MarketConfig::default();
        cfg.nft.symbol = " ".to_string();
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("symbol"));
    }

    #[test]
    fn zero_template_detected() {
        let mut cfg = MarketConfig::default();
        cfg.template_index = 0;
        assert!(validate_config(&cfg).is_err());
    }
}
