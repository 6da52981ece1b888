//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction pipeline
///
/// All values the core consumes; how they are sourced (CLI flags, config
/// file, environment) is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Model identifier passed to the AI provider
    pub model: String,

    /// Token budget per chunk, before the safety margin
    pub chunk_token_limit: usize,

    /// Fraction of the token limit actually used when packing chunks
    pub chunk_safety_margin: f64,

    /// Mandatory delay between consecutive AI calls (milliseconds)
    ///
    /// Rate-limit pacing required by the model service; not a tuning knob
    /// to zero out in production.
    pub request_delay_ms: u64,

    /// Maximum time for a single AI call (seconds)
    pub request_timeout_secs: u64,

    /// Retry attempts for transient provider errors
    pub max_retries: u32,

    /// Base backoff delay, doubled per attempt (milliseconds)
    pub retry_backoff_ms: u64,

    /// Run the keyword engine when every AI chunk failed
    ///
    /// Fallback is explicit: it never triggers on partial failure.
    pub fallback_to_keyword: bool,

    /// Near-duplicate similarity threshold for the quality filter
    pub similarity_threshold: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            chunk_token_limit: 6_000,
            chunk_safety_margin: 0.8,
            request_delay_ms: 1_500,
            request_timeout_secs: 60,
            max_retries: 3,
            retry_backoff_ms: 1_000,
            fallback_to_keyword: false,
            similarity_threshold: 0.9,
        }
    }
}

impl ExtractorConfig {
    /// Get the per-call timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the inter-call delay as a Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Get the base retry backoff as a Duration
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.chunk_token_limit == 0 {
            return Err("chunk_token_limit must be greater than 0".to_string());
        }
        if !(self.chunk_safety_margin > 0.0 && self.chunk_safety_margin <= 1.0) {
            return Err(format!(
                "chunk_safety_margin {} outside (0.0, 1.0]",
                self.chunk_safety_margin
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(format!(
                "similarity_threshold {} outside [0.0, 1.0]",
                self.similarity_threshold
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
