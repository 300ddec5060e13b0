//! Error types for Datasnap.
//!
//! The snapshot operations themselves never fail; these errors only come from
//! the edges that touch files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Datasnap operations.
pub type Result<T> = std::result::Result<T, DatasnapError>;

/// Errors that can occur in Datasnap.
#[derive(Debug, Error)]
pub enum DatasnapError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Unsupported file format.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// Offending file extension.
        extension: String,
    },

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data source in the input file has the wrong shape.
    #[error("Invalid data source '{source_name}': {reason}")]
    InvalidSource {
        /// Name (or index) of the source.
        source_name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasnapError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create an InvalidSource error.
    pub fn invalid_source(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSource {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
