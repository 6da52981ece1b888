//! Prepmine LLM Provider Layer
//!
//! Pluggable AI provider implementations for question extraction.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `prepmine-domain`. The pipeline only sees prompt-in/text-out; everything
//! provider-specific (endpoints, auth, response envelopes) stays here.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing, with scripted per-call
//!   response sequences and error injection
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use prepmine_llm::MockProvider;
//! use prepmine_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("{}");
//! let result = provider.generate("test prompt", "any-model").unwrap();
//! assert_eq!(result, "{}");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use prepmine_domain::traits::{LlmProvider as LlmProviderTrait, Transience};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Authentication or authorization failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The request itself was rejected as malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Response body did not have the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Transience for LlmError {
    /// Rate limits, timeouts, and transport failures are worth retrying;
    /// auth and malformed-request errors never are.
    fn is_transient(&self) -> bool {
        matches!(
            self,
            LlmError::Communication(_) | LlmError::Timeout | LlmError::RateLimited
        )
    }
}

/// One scripted mock behavior: a canned response or an injected error
#[derive(Debug, Clone)]
enum MockStep {
    Respond(String),
    Fail(LlmError),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls. A
/// scripted queue lets tests drive per-call sequences (e.g. valid response,
/// then garbage, then valid again); once the queue is drained the provider
/// falls back to its default response.
///
/// # Examples
///
/// ```
/// use prepmine_llm::{LlmError, MockProvider};
/// use prepmine_domain::traits::LlmProvider;
///
/// let provider = MockProvider::new("default")
///     .then_respond("first")
///     .then_fail(LlmError::RateLimited);
///
/// assert_eq!(provider.generate("p", "m").unwrap(), "first");
/// assert!(provider.generate("p", "m").is_err());
/// assert_eq!(provider.generate("p", "m").unwrap(), "default");
/// assert_eq!(provider.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<MockStep>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a response for the next unscripted call
    pub fn then_respond(self, response: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(MockStep::Respond(response.into()));
        self
    }

    /// Queue an error for the next unscripted call
    pub fn then_fail(self, error: LlmError) -> Self {
        self.script.lock().unwrap().push_back(MockStep::Fail(error));
        self
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _prompt: &str, _model: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(MockStep::Respond(response)) => Ok(response),
            Some(MockStep::Fail(error)) => Err(error),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt", "any-model");
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_scripted_sequence() {
        let provider = MockProvider::new("fallback")
            .then_respond("one")
            .then_respond("two");

        assert_eq!(provider.generate("p", "m").unwrap(), "one");
        assert_eq!(provider.generate("p", "m").unwrap(), "two");
        assert_eq!(provider.generate("p", "m").unwrap(), "fallback");
    }

    #[test]
    fn test_mock_provider_error_injection() {
        let provider = MockProvider::default().then_fail(LlmError::Auth("bad key".into()));

        let err = provider.generate("p", "m").unwrap_err();
        assert!(matches!(err, LlmError::Auth(_)));
        assert_eq!(provider.generate("p", "m").unwrap(), "{}");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("x");
        assert_eq!(provider.call_count(), 0);

        provider.generate("a", "m").unwrap();
        provider.generate("b", "m").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("x").then_respond("scripted");
        let provider2 = provider1.clone();

        assert_eq!(provider2.generate("p", "m").unwrap(), "scripted");
        // Script was consumed through the clone
        assert_eq!(provider1.generate("p", "m").unwrap(), "x");
        assert_eq!(provider1.call_count(), 2);
    }

    #[test]
    fn test_transience_classification() {
        assert!(LlmError::RateLimited.is_transient());
        assert!(LlmError::Timeout.is_transient());
        assert!(LlmError::Communication("reset".into()).is_transient());
        assert!(!LlmError::Auth("denied".into()).is_transient());
        assert!(!LlmError::InvalidRequest("bad body".into()).is_transient());
        assert!(!LlmError::InvalidResponse("no candidates".into()).is_transient());
        assert!(!LlmError::ModelNotAvailable("nope".into()).is_transient());
    }
}
