//! AI extraction engine and the pipeline entry point

use crate::aggregate::aggregate;
use crate::chunking::ReviewChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::keyword::KeywordExtractor;
use crate::parser::parse_ai_response;
use crate::prompt::PromptBuilder;
use crate::types::{Chunk, ChunkFailure, ChunkFragment, ExtractionReport, RunOutcome};
use prepmine_domain::traits::{LlmProvider, Transience};
use prepmine_domain::{ExtractedQuestion, ExtractionMethod, Review};
use std::sync::Arc;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// Outcome of one provider call attempt, flattened for the retry loop
struct CallFailure {
    transient: bool,
    message: String,
}

/// The AI extraction engine
///
/// Processes chunks sequentially: one provider call per chunk, a mandatory
/// delay between calls, a timeout on every call, and bounded retries with
/// exponential backoff for transient provider errors. A chunk that still
/// fails is recorded and skipped; the run always completes.
pub struct AiExtractor<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> AiExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
{
    /// Create a new engine over a provider
    pub fn new(provider: L, config: ExtractorConfig) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Config)?;
        Ok(Self {
            provider: Arc::new(provider),
            config,
        })
    }

    /// Run extraction over the full review sequence
    pub async fn run(&self, reviews: &[Review]) -> ExtractionReport {
        let chunker = ReviewChunker::new(
            self.config.chunk_token_limit,
            self.config.chunk_safety_margin,
        );
        let chunks = chunker.chunk(reviews);

        info!(
            "Starting AI extraction: {} reviews in {} chunks",
            reviews.len(),
            chunks.len()
        );

        let mut fragments = Vec::new();
        let mut failures = Vec::new();

        for chunk in &chunks {
            if chunk.index > 0 {
                // Rate-limit pacing required by the model service
                sleep(self.config.request_delay()).await;
            }

            debug!(
                "Processing chunk {}/{} ({} reviews, ~{} tokens)",
                chunk.index + 1,
                chunks.len(),
                chunk.len(),
                chunk.estimated_tokens
            );

            match self.extract_chunk(chunk).await {
                Ok(fragment) => {
                    info!(
                        "Chunk {}: extracted {} candidate questions",
                        chunk.index + 1,
                        fragment.questions.len()
                    );
                    fragments.push(fragment);
                }
                Err(e) => {
                    warn!("Chunk {} failed: {}", chunk.index + 1, e);
                    failures.push(ChunkFailure {
                        chunk_index: chunk.index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        aggregate(
            fragments,
            failures,
            reviews.len(),
            chunks.len(),
            ExtractionMethod::Ai,
            Some(self.config.model.clone()),
            self.config.similarity_threshold,
        )
    }

    /// Extract candidate questions from a single chunk
    pub async fn extract_chunk(&self, chunk: &Chunk<'_>) -> Result<ChunkFragment, ExtractError> {
        let prompt = PromptBuilder::new(chunk).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self.call_with_retries(&prompt).await?;
        debug!("Response length: {} chars", response.len());

        let parsed = parse_ai_response(&response)?;

        // Flatten the map in category priority order; the aggregator's
        // quality filter handles validation and dedup
        let questions: Vec<ExtractedQuestion> = parsed
            .into_iter()
            .flat_map(|(category, texts)| {
                texts
                    .into_iter()
                    .map(move |text| ExtractedQuestion::new(text, category))
            })
            .collect();

        Ok(ChunkFragment {
            chunk_index: chunk.index,
            questions,
        })
    }

    /// Call the provider, retrying transient failures with backoff
    async fn call_with_retries(&self, prompt: &str) -> Result<String, ExtractError> {
        let mut attempt: u32 = 0;
        loop {
            match self.call_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(failure) => {
                    if !failure.transient || attempt >= self.config.max_retries {
                        return Err(ExtractError::Llm(failure.message));
                    }
                    let backoff = self.config.retry_backoff() * 2u32.pow(attempt);
                    warn!(
                        "Transient provider error (attempt {}): {}; retrying in {:?}",
                        attempt + 1,
                        failure.message,
                        backoff
                    );
                    sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One provider call under the configured timeout
    ///
    /// The provider trait is synchronous, so the call runs on the blocking
    /// pool; transience is flattened inside the closure so the error type
    /// never crosses the task boundary.
    async fn call_once(&self, prompt: &str) -> Result<String, CallFailure> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();
        let model = self.config.model.clone();

        let call = tokio::task::spawn_blocking(move || {
            provider.generate(&prompt, &model).map_err(|e| CallFailure {
                transient: e.is_transient(),
                message: e.to_string(),
            })
        });

        match timeout(self.config.request_timeout(), call).await {
            Err(_) => Err(CallFailure {
                transient: true,
                message: format!(
                    "request timed out after {}s",
                    self.config.request_timeout_secs
                ),
            }),
            Ok(Err(join_err)) => Err(CallFailure {
                transient: false,
                message: format!("task join error: {}", join_err),
            }),
            Ok(Ok(result)) => result,
        }
    }
}

/// Run the full pipeline with the configured extraction method
///
/// The single entry point callers use: selects the engine, and when the AI
/// path fails for every chunk and `fallback_to_keyword` is set, reruns the
/// keyword engine over the same reviews. Fallback never triggers on partial
/// failure, and never implicitly.
pub async fn run_pipeline<L>(
    reviews: &[Review],
    provider: L,
    method: ExtractionMethod,
    config: &ExtractorConfig,
) -> Result<ExtractionReport, ExtractError>
where
    L: LlmProvider + Send + Sync + 'static,
{
    config.validate().map_err(ExtractError::Config)?;

    match method {
        ExtractionMethod::Keyword => {
            let extractor = KeywordExtractor::new()?;
            Ok(extractor.run(reviews, config))
        }
        ExtractionMethod::Ai => {
            let engine = AiExtractor::new(provider, config.clone())?;
            let report = engine.run(reviews).await;

            if report.outcome() == RunOutcome::AllChunksFailed && config.fallback_to_keyword {
                info!("Every AI chunk failed; falling back to keyword extraction");
                let extractor = KeywordExtractor::new()?;
                return Ok(extractor.run(reviews, config));
            }

            Ok(report)
        }
    }
}
