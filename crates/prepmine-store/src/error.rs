//! Store error types

use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error reading or writing a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Review file parsed but contained no usable review array
    #[error("Invalid review file: {0}")]
    InvalidReviewFile(String),
}
