//! Structural codecs, one per supported format.
//!
//! Each codec is a pair of pure functions between a serde-capable value and
//! its byte encoding; [`encode`] and [`decode`] select one by [`Format`].
//! Nothing in this module touches the filesystem.

pub mod json;
pub mod xml;
pub mod yaml;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Format;

pub use yaml::{YamlEmitter, YamlError};

/// Error from one of the underlying codecs.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML codec error: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("YAML codec error: {0}")]
    Yaml(#[from] YamlError),
}

/// Encodes `value` with the codec matching `format`.
pub fn encode<T: Serialize>(format: Format, value: &T) -> Result<Vec<u8>, CodecError> {
    match format {
        Format::Json => json::encode(value),
        Format::Xml => xml::encode(value),
        Format::Yaml => yaml::encode(value),
    }
}

/// Decodes `bytes` with the codec matching `format`.
pub fn decode<T: DeserializeOwned>(format: Format, bytes: &[u8]) -> Result<T, CodecError> {
    match format {
        Format::Json => json::decode(bytes),
        Format::Xml => xml::decode(bytes),
        Format::Yaml => yaml::decode(bytes),
    }
}
