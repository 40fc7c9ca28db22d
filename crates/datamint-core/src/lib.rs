//! datamint-core
//!
//! Core primitives for datamint:
//! - SVG escaping for `data:` URIs and a deterministic wave renderer
//! - NFT metadata records and base64 token URIs
//! - Publish-form model (dataset / algorithm variants) and draft defaults
//! - Timeout label mapping and the form -> canonical metadata transform
//!
//! The core crate does no network or filesystem I/O and never reads the
//! system clock. Callers inject timestamps and collaborators.

pub mod config;
pub mod errors;
pub mod metadata;
pub mod nft;

pub use crate::errors::{DatamintError, DatamintResult};

/// Media-type prefix for URI-embedded SVG images.
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml,";

/// Media-type prefix consumers put in front of a base64 token URI.
pub const JSON_BASE64_URI_PREFIX: &str = "data:application/json;base64,";

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{validate_config, MarketConfig, NftIdentity};
    pub use crate::metadata::form::{
        AccessType, AlgorithmForm, DatasetForm, DatatokenOptions, DockerImageChoice, FileEntry,
        PublishForm, PublishType,
    };
    pub use crate::metadata::model::{AssetType, CanonicalMetadata, ServiceType};
    pub use crate::metadata::timeout::{map_timeout, TimeoutLabel};
    pub use crate::metadata::transform::{transform_algorithm, transform_dataset, TransformContext};
    pub use crate::nft::options::{build_nft_options, NftOptions};
    pub use crate::nft::render::{ImageRenderer, WaveRenderer};
    pub use crate::nft::svg::encode_svg;
    pub use crate::nft::token_uri::{encode_token_uri, TokenCreationData};
    pub use crate::{DatamintError, DatamintResult};
}
