//! Write structured values to files and read them back.
//!
//! The wire format (JSON, XML, or YAML) is inferred from the filename's
//! extension or picked by an explicit format hint; [`write`] and [`read`]
//! reconcile the two. The per-format entry points ([`write_json`] and
//! friends) skip resolution and always use their fixed codec.
//!
//! Every operation is a single linear attempt: errors from the codecs and
//! the filesystem are returned to the caller unchanged, never logged or
//! retried. Writes to the same path from concurrent callers are not
//! coordinated; last writer wins.

pub mod codecs;

mod error;
mod file;
mod format;

pub use codecs::{CodecError, YamlError};
pub use error::Error;
pub use file::{read, read_json, read_xml, read_yaml, write, write_json, write_xml, write_yaml};
pub use format::Format;
