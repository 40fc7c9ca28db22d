use anyhow::Result;
use datamint_core::config::{validate_config, MarketConfig};
use datamint_core::nft::options::NftOptions;
use datamint_core::nft::prepare_nft_create_data;
use datamint_core::nft::render::{ImageRenderer, StaticSvg, WaveRenderer};
use datamint_core::nft::token_uri::{token_uri_data_url, TokenCreationData};
use serde::Serialize;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftOut {
    pub options: NftOptions,
    pub create_data: TokenCreationData,
    pub token_uri_data_url: String,
}

pub fn run(svg: Option<&str>) -> Result<()> {
    let cfg = MarketConfig::default();
    validate_config(&cfg)?;

    let renderer: Box<dyn ImageRenderer> = match svg {
        Some(path) => Box::new(StaticSvg(input::read_svg(path)?)),
        None => Box::new(WaveRenderer::default()),
    };

    let mint = prepare_nft_create_data(&*renderer, &cfg)?;
    output::print(&NftOut {
        token_uri_data_url: token_uri_data_url(&mint.create_data.token_uri),
        options: mint.options,
        create_data: mint.create_data,
    })
}
