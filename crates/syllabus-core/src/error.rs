//! Error types for the syllabus-core library.

use thiserror::Error;

/// Main error type for the syllabus library.
#[derive(Error, Debug)]
pub enum SyllabusError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while writing extracted records.
///
/// Extraction itself never fails; every failure the library reports comes
/// from turning records into bytes or moving those bytes onto disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying write failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The temporary file could not replace the destination.
    #[error("failed to persist output: {0}")]
    Persist(String),

    /// Exporter produced bytes that are not valid UTF-8.
    #[error("invalid output encoding: {0}")]
    Encoding(String),
}

impl From<tempfile::PersistError> for ExportError {
    fn from(err: tempfile::PersistError) -> Self {
        ExportError::Persist(err.error.to_string())
    }
}

/// Result type for the syllabus library.
pub type Result<T> = std::result::Result<T, SyllabusError>;
