//! Error types for the config store and save path resolution

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by [`crate::config::ConfigStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key has no entry in the file. Recoverable by the caller.
    #[error("Key '{key}' not found in config file '{}'.", path.display())]
    KeyNotFound { key: String, path: PathBuf },

    #[error("Failed to access config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot determine config directory")]
    NoConfigDir,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, StoreError::KeyNotFound { .. })
    }
}

/// Reasons a platform default save path cannot be computed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Unsupported OS: {0}")]
    Unsupported(String),

    #[error("Cannot determine home directory")]
    NoHomeDir,
}

/// Fatal failures of the fallback chain
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to read save path from console: {0}")]
    Input(#[source] io::Error),

    #[error("Input stream closed before a save path was entered")]
    InputClosed,
}
