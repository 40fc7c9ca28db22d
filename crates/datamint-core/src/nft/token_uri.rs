//! Token URI encoding.
//!
//! The NFT record is serialized to JSON and base64-encoded (standard
//! alphabet, padded). Consumers read it as
//! `data:application/json;base64,<payload>`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{DatamintError, DatamintResult};
use crate::nft::options::NftOptions;
use crate::JSON_BASE64_URI_PREFIX;

/// Arguments for the on-chain NFT creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreationData {
    pub name: String,
    pub symbol: String,
    pub template_index: u32,
    #[serde(rename = "tokenURI")]
    pub token_uri: String,
}

/// Serialize `options` to JSON and base64-encode it.
pub fn encode_token_uri(options: &NftOptions) -> DatamintResult<String> {
    let json = serde_json::to_string(options).map_err(|e| {
        DatamintError::encoding(format!("failed to serialize nft metadata: {e}"))
    })?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Inverse of [`encode_token_uri`]. Accepts the bare payload or the full
/// `data:application/json;base64,` form.
pub fn decode_token_uri(uri: &str) -> DatamintResult<NftOptions> {
    let payload = uri.strip_prefix(JSON_BASE64_URI_PREFIX).unwrap_or(uri);
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DatamintError::encoding(format!("invalid base64 token uri: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| DatamintError::serialization(format!("invalid nft metadata json: {e}")))
}

/// Prefix a token URI payload with its media type.
pub fn token_uri_data_url(token_uri: &str) -> String {
    format!("{JSON_BASE64_URI_PREFIX}{token_uri}")
}

/// Derive the creation arguments from an NFT record.
pub fn nft_create_data(options: &NftOptions, template_index: u32) -> DatamintResult<TokenCreationData> {
    Ok(TokenCreationData {
        name: options.name.clone(),
        symbol: options.symbol.clone(),
        template_index,
        token_uri: encode_token_uri(options)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NftIdentity;
    use crate::nft::options::build_nft_options;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    #[test]
    fn decode_reproduces_record() {
        let nft = build_nft_options("<svg><circle r=\"4\"/></svg>", &NftIdentity::default());
        let uri = encode_token_uri(&nft).unwrap();
        assert_eq!(decode_token_uri(&uri).unwrap(), nft);
        assert_eq!(decode_token_uri(&token_uri_data_url(&uri)).unwrap(), nft);
    }

    #[test]
    fn decoded_bytes_equal_serialization() {
        let nft = build_nft_options("<svg></svg>", &NftIdentity::default());
        let uri = encode_token_uri(&nft).unwrap();
        let bytes = STANDARD.decode(&uri).unwrap();
        assert_eq!(bytes, serde_json::to_vec(&nft).unwrap());
    }

    #[test]
    fn create_data_copies_identity() {
        let nft = build_nft_options("<svg></svg>", &NftIdentity::default());
        let data = nft_create_data(&nft, 1).unwrap();
        assert_eq!(data.name, nft.name);
        assert_eq!(data.symbol, nft.symbol);
        assert_eq!(data.template_index, 1);

        let v = serde_json::to_value(&data).unwrap();
        assert!(v.get("tokenURI").is_some());
        assert_eq!(v["templateIndex"], 1);
    }

    #[test]
    fn garbage_payload_is_an_encoding_error() {
        assert_matches!(decode_token_uri("not base64!"), Err(DatamintError::Encoding(_)));
    }

    proptest! {
        #[test]
        fn arbitrary_descriptions_round_trip(desc in "\\PC{0,80}") {
            let mut identity = NftIdentity::default();
            identity.description = desc;
            let nft = build_nft_options("<svg></svg>", &identity);
            let uri = encode_token_uri(&nft).unwrap();
            prop_assert_eq!(decode_token_uri(&uri).unwrap(), nft);
        }
    }
}
