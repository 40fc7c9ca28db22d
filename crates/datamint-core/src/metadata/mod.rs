//! Publish-form model and its transformation into canonical asset metadata.

pub mod docker;
pub mod form;
pub mod model;
pub mod timeout;
pub mod transform;
