//! Error types for loading, querying and writing close-approach data.

use std::path::PathBuf;

use neo_seeker::SeekerError;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid calendar date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("close-approach data has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("malformed record {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("unsupported output format for {0} (expected .csv or .json)")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Criterion(#[from] SeekerError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        StoreError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
