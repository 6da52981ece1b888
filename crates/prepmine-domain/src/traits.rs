//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the pipeline and its two
//! external collaborators: the AI model service and the scraper.
//! Infrastructure implementations live in other crates.

use crate::Review;

/// Transient/permanent classification for boundary errors
///
/// The extraction engine retries an operation only when its error reports
/// itself as transient (rate limit, timeout, flaky transport). Auth and
/// malformed-request errors are permanent and fail immediately.
pub trait Transience {
    /// Whether a retry of the same operation could plausibly succeed
    fn is_transient(&self) -> bool;
}

/// Trait for the external AI collaborator
///
/// Implemented by the infrastructure layer (prepmine-llm). One operation:
/// prompt in, response text out, fallible. The pipeline treats the provider
/// as a black box and never parses provider-specific error bodies.
pub trait LlmProvider {
    /// Error type for provider operations
    type Error: Transience + std::fmt::Display;

    /// Generate a completion for the prompt using the given model
    fn generate(&self, prompt: &str, model: &str) -> Result<String, Self::Error>;
}

/// Trait for the external scraper collaborator
///
/// The core consumes an ordered sequence of reviews and never retries
/// scrape failures; retry policy, pagination, and anti-bot handling are the
/// implementor's concern.
pub trait ReviewSource {
    /// Error type for scrape operations
    type Error: std::fmt::Display;

    /// Fetch reviews for the given source, bounded by `max_pages`
    fn fetch_reviews(&self, source: &str, max_pages: usize) -> Result<Vec<Review>, Self::Error>;
}
