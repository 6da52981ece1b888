//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Per-chunk failures (provider errors, malformed responses) are converted
/// to recorded `ChunkFailure` entries by the engine; an `ExtractError` only
/// escapes a run for configuration problems.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// AI provider error, already flattened to a message
    #[error("LLM error: {0}")]
    Llm(String),

    /// AI response did not conform to the expected structured shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractError {
    fn from(e: serde_json::Error) -> Self {
        ExtractError::InvalidFormat(format!("JSON parse error: {}", e))
    }
}
