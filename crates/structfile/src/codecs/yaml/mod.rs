//! YAML codec: block-style output with a trailing newline.
//!
//! Parsing goes through `serde_yaml`. Emission does not: the document shape
//! this crate guarantees (four-space nesting, `- ` items with two-space
//! continuation) is produced by [`YamlEmitter`] over a [`serde_yaml::Value`]
//! tree.

mod emitter;
mod error;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::CodecError;

pub use emitter::YamlEmitter;
pub use error::YamlError;

/// Encodes `value` as a block-style YAML document.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let value = serde_yaml::to_value(value).map_err(YamlError::from)?;
    let mut emitter = YamlEmitter::new();
    Ok(emitter.encode(&value)?)
}

/// Decodes a YAML document into a `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(serde_yaml::from_slice(bytes).map_err(YamlError::from)?)
}
