//! Crate-level error taxonomy.

use thiserror::Error;

use crate::codecs::CodecError;

/// Errors returned by the file operations.
///
/// Codec and I/O failures pass through transparently; the remaining
/// variants describe why no codec could be chosen in the first place.
#[derive(Debug, Error)]
pub enum Error {
    /// The destination or source path was empty.
    #[error("filename is undefined")]
    FilenameUndefined,
    /// The destination has no extension and no format hint was given.
    #[error("cannot resolve a format: the filename has no extension and no format was given")]
    FormatUnresolved,
    /// The resolved format token is not in the supported set.
    #[error("{0} is not a supported format")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
