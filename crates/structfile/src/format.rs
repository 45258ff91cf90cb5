//! Format tokens and filename/format reconciliation.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Error;

/// Serialization format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
    Yaml,
}

impl Format {
    /// File extension for the format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Parses a format token, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "yaml" => Ok(Format::Yaml),
            other => Err(Error::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Extension of `path`, lower-cased and without the leading dot.
///
/// A missing or empty extension yields `None`.
fn extension_token(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Appends `.{extension}` to a path, keeping any existing suffix.
fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut joined = OsString::from(path.as_os_str());
    joined.push(".");
    joined.push(extension);
    PathBuf::from(joined)
}

/// Format implied by a path's extension alone.
pub(crate) fn from_extension(path: &Path) -> Result<Format, Error> {
    extension_token(path).unwrap_or_default().parse()
}

/// Reconciles a destination path with an optional format hint.
///
/// Pure string logic: returns the path to write to and the format to encode
/// with. The hint wins whenever it is present, and the resolved path always
/// ends in the resolved format's extension; a hint that contradicts an
/// existing extension is appended after it rather than replacing it.
pub(crate) fn resolve_target(path: &Path, hint: Option<&str>) -> Result<(PathBuf, Format), Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::FilenameUndefined);
    }

    let hint = hint.filter(|hint| !hint.is_empty());

    match (extension_token(path), hint) {
        (None, None) => Err(Error::FormatUnresolved),
        (None, Some(hint)) => {
            let format = hint.parse::<Format>()?;
            Ok((append_extension(path, format.extension()), format))
        }
        (Some(extension), None) => Ok((path.to_path_buf(), extension.parse()?)),
        (Some(extension), Some(hint)) => {
            let format = hint.parse::<Format>()?;
            if extension == hint.to_ascii_lowercase() {
                Ok((path.to_path_buf(), format))
            } else {
                Ok((append_extension(path, format.extension()), format))
            }
        }
    }
}
