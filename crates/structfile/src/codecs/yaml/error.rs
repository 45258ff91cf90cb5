//! YAML codec error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    /// The emitter only writes scalar mapping keys.
    #[error("mapping keys must be scalars")]
    ComplexKey,
    #[error(transparent)]
    Value(#[from] serde_yaml::Error),
}
