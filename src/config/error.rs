//! Errors raised while loading a machine description.

use crate::builder::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a description from JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The description file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON did not match the description schema
    #[error("Invalid machine description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The description parsed but is inconsistent
    #[error("Inconsistent machine description: {0}")]
    Invalid(#[from] ConfigError),
}
