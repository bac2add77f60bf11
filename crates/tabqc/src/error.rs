//! Error types for the tabqc library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabqc operations.
#[derive(Debug, Error)]
pub enum TabqcError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Row records that cannot be coerced to a uniform table.
    #[error("Malformed rows: {0}")]
    MalformedRows(String),
}

/// Result type alias for tabqc operations.
pub type Result<T> = std::result::Result<T, TabqcError>;
