//! Error types for registry construction and the CLI around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, hashing, or writing a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Duplicate registry entry: {path} (reached through more than one directory)")]
    DuplicateEntry { path: String },

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Wrap an I/O error for `path`, turning `NotFound` kinds into [`RegistryError::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            RegistryError::NotFound { path }
        } else {
            RegistryError::Io { path, source }
        }
    }
}

impl From<config::ConfigError> for RegistryError {
    fn from(err: config::ConfigError) -> Self {
        RegistryError::Config(err.to_string())
    }
}
