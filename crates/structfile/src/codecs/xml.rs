//! XML codec: one element per field, root element named after the type.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::CodecError;

/// Encodes `value` as an XML document rooted at the value's type name.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(quick_xml::se::to_string(value)?.into_bytes())
}

/// Decodes an XML document into a `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(quick_xml::de::from_reader(bytes)?)
}
