use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for metadata-update operations
#[derive(Error, Debug)]
pub enum MetadataUpdateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag parsing error: {0}")]
    Parse(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata format error in {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience type alias for Results in metadata-update
pub type Result<T> = std::result::Result<T, MetadataUpdateError>;

impl MetadataUpdateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MetadataUpdateError::Config(msg.into())
    }

    /// Create a tag parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        MetadataUpdateError::Parse(msg.into())
    }

    /// Wrap an I/O failure together with the file it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        MetadataUpdateError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a YAML (de)serialization failure together with the file it concerns
    pub fn format(path: impl AsRef<Path>, source: serde_yaml::Error) -> Self {
        MetadataUpdateError::Format {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
