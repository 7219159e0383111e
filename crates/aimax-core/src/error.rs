//! Error types for aimax-core

use std::path::PathBuf;

/// Result type for aimax-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in aimax-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure with the path that caused it
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Packaged source directory for a component is missing
    #[error("Source directory not found: {path}")]
    SourceMissing { path: PathBuf },

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
