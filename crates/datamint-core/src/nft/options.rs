//! NFT metadata record (OpenSea metadata standard).
//!
//! Field names on the wire follow the standard (`external_url`,
//! `image_data`, `background_color`). The builder always fills
//! `image_data` and leaves `image` empty.

use serde::{Deserialize, Serialize};

use crate::config::NftIdentity;
use crate::nft::render::ImageRenderer;
use crate::nft::svg::encode_svg;
use crate::SVG_DATA_URI_PREFIX;

/// Metadata describing the NFT that represents a published asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftOptions {
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Build the record from already rendered SVG markup.
pub fn build_nft_options(rendered_image: &str, identity: &NftIdentity) -> NftOptions {
    NftOptions {
        name: identity.name.clone(),
        symbol: identity.symbol.clone(),
        description: identity.description.clone(),
        image: None,
        external_url: Some(identity.external_url.clone()),
        image_data: Some(format!("{SVG_DATA_URI_PREFIX}{}", encode_svg(rendered_image))),
        background_color: Some(identity.background_color.clone()),
    }
}

impl NftOptions {
    /// Render artwork with `renderer` and build the record around it.
    pub fn generate(renderer: &dyn ImageRenderer, identity: &NftIdentity) -> Self {
        build_nft_options(&renderer.render(), identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_data_embeds_encoded_svg() {
        let identity = NftIdentity::default();
        let nft = build_nft_options("<svg></svg>", &identity);
        assert_eq!(
            nft.image_data.as_deref(),
            Some(format!("data:image/svg+xml,{}", encode_svg("<svg></svg>")).as_str())
        );
        assert_eq!(nft.name, "Ocean Asset v4 NFT");
        assert_eq!(nft.symbol, "OCEAN-V4-NFT");
        assert_eq!(nft.background_color.as_deref(), Some("141414"));
        assert!(nft.image.is_none());
    }

    #[test]
    fn serializes_with_standard_field_names() {
        let nft = build_nft_options("<svg></svg>", &NftIdentity::default());
        let v = serde_json::to_value(&nft).unwrap();
        assert!(v.get("image_data").is_some());
        assert!(v.get("external_url").is_some());
        assert!(v.get("background_color").is_some());
        assert!(v.get("image").is_none());
    }
}
