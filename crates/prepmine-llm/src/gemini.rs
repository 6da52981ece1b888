//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language API, the model service
//! the original pipeline targets.
//!
//! # Features
//!
//! - Async HTTP communication with the generateContent endpoint
//! - Configurable endpoint (for test servers) and per-call model selection
//! - Status-code mapping into the transient/permanent error taxonomy
//! - Request timeout handling
//!
//! Retry pacing is deliberately NOT implemented here: the extraction engine
//! owns the retry/backoff policy so it can be configured alongside the rest
//! of the pipeline.

use crate::LlmError;
use prepmine_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API provider
///
/// Holds the API key and HTTP client; the model is chosen per call so a
/// single provider can serve different pipeline configurations.
pub struct GeminiProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new provider against the public API endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a provider against a custom endpoint (test servers, proxies)
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Generate text for the prompt with the given model
    ///
    /// # Errors
    ///
    /// Maps HTTP failures into the pipeline's error taxonomy:
    /// 429 and 5xx are transient, 401/403/400/404 are permanent, and
    /// transport-level failures (timeouts, connection resets) are transient.
    pub async fn generate(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, model, self.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                429 => LlmError::RateLimited,
                401 | 403 => LlmError::Auth(format!("HTTP {}: {}", status, body)),
                400 => LlmError::InvalidRequest(body),
                404 => LlmError::ModelNotAvailable(model.to_string()),
                s if s >= 500 => LlmError::Communication(format!("HTTP {}: {}", status, body)),
                _ => LlmError::InvalidResponse(format!("HTTP {}: {}", status, body)),
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text: String = envelope
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Response contained no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str, model: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; the extraction engine invokes
        // this through spawn_blocking
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Communication(format!("Runtime error: {}", e)))?
            .block_on(async { self.generate(prompt, model).await })
    }
}
