//! File-level write and read operations.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::format::{from_extension, resolve_target};
use crate::{codecs, Error, Format};

/// Encodes `value` and writes it to `path`, resolving the format from the
/// path's extension and the optional `format` hint.
///
/// If the path carries no extension, the resolved format's extension is
/// appended; if the extension and a given hint disagree, the hint wins and
/// its extension is appended after the existing one. The file is created if
/// absent and truncated if present. A failure while writing may leave a
/// partially written file behind; no cleanup is attempted.
pub fn write<T: Serialize>(
    path: impl AsRef<Path>,
    format: Option<&str>,
    value: &T,
) -> Result<(), Error> {
    let (target, format) = resolve_target(path.as_ref(), format)?;
    let data = codecs::encode(format, value)?;
    fs::write(target, data)?;
    Ok(())
}

/// Reads `path` and decodes it into a `T`, with the format taken from the
/// path's extension.
///
/// The extension is validated before the file is opened, so a missing or
/// unreadable file with an unsupported extension reports the format error
/// rather than an I/O error.
pub fn read<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::FilenameUndefined);
    }
    let format = from_extension(path)?;
    let data = fs::read(path)?;
    Ok(codecs::decode(format, &data)?)
}

fn write_fixed<T: Serialize>(format: Format, path: &Path, value: &T) -> Result<(), Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::FilenameUndefined);
    }
    let data = codecs::encode(format, value)?;
    fs::write(path, data)?;
    Ok(())
}

fn read_fixed<T: DeserializeOwned>(format: Format, path: &Path) -> Result<T, Error> {
    let data = fs::read(path)?;
    Ok(codecs::decode(format, &data)?)
}

/// Writes `value` to `path` as JSON, without inspecting the extension.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), Error> {
    write_fixed(Format::Json, path.as_ref(), value)
}

/// Reads `path` and decodes it as JSON, without inspecting the extension.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    read_fixed(Format::Json, path.as_ref())
}

/// Writes `value` to `path` as XML, without inspecting the extension.
pub fn write_xml<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), Error> {
    write_fixed(Format::Xml, path.as_ref(), value)
}

/// Reads `path` and decodes it as XML, without inspecting the extension.
pub fn read_xml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    read_fixed(Format::Xml, path.as_ref())
}

/// Writes `value` to `path` as YAML, without inspecting the extension.
pub fn write_yaml<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), Error> {
    write_fixed(Format::Yaml, path.as_ref(), value)
}

/// Reads `path` and decodes it as YAML, without inspecting the extension.
pub fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    read_fixed(Format::Yaml, path.as_ref())
}
