//! NFT sub-pipeline: render artwork, build the metadata record, encode the
//! token URI.

pub mod options;
pub mod render;
pub mod svg;
pub mod token_uri;

use crate::config::MarketConfig;
use crate::errors::DatamintResult;
use crate::nft::options::NftOptions;
use crate::nft::render::ImageRenderer;
use crate::nft::token_uri::{nft_create_data, TokenCreationData};

/// Everything needed to mint the NFT for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftMint {
    pub options: NftOptions,
    pub create_data: TokenCreationData,
}

/// Render, build and encode in one step.
pub fn prepare_nft_create_data(
    renderer: &dyn ImageRenderer,
    cfg: &MarketConfig,
) -> DatamintResult<NftMint> {
    let options = NftOptions::generate(renderer, &cfg.nft);
    let create_data = nft_create_data(&options, cfg.template_index)?;
    Ok(NftMint {
        options,
        create_data,
    })
}
