//! JSON codec: compact output, struct fields in declaration order.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::CodecError;

/// Encodes `value` as compact JSON with no trailing newline.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}

/// Decodes a JSON document into a `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
