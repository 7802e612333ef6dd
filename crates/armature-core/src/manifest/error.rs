//! # Armature Manifest Errors
//!
//! Errors raised while locating or reading component list resources.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to locate resources named '{name}' with locator '{locator}': {message}")]
    Locate {
        locator: String,
        name: String,
        message: String,
    },

    #[error("Failed to read component list '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Read {
            path: path.into(),
            source,
        }
    }
}
