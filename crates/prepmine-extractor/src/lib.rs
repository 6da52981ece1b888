//! Prepmine Extractor
//!
//! Turns an ordered collection of scraped interview reviews into a
//! deduplicated, categorized set of interview questions.
//!
//! # Architecture
//!
//! ```text
//! Reviews → Chunker → {AI engine | Keyword engine} → Quality Filter → CategorizedResult
//! ```
//!
//! # Key Features
//!
//! - **Chunking**: batches reviews under an estimated token budget so each
//!   AI call fits the model context
//! - **Two engines**: an LLM-based extractor and a deterministic
//!   regex/keyword fallback with the same output shape
//! - **Failure isolation**: one chunk's failure never aborts the run; the
//!   run records failed chunks and returns partial results
//! - **Pacing**: mandatory inter-call delay, per-call timeout, and bounded
//!   retries with exponential backoff on transient provider errors
//!
//! # Example Usage
//!
//! ```no_run
//! use prepmine_extractor::{run_pipeline, ExtractorConfig};
//! use prepmine_domain::{ExtractionMethod, Review};
//! use prepmine_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"coding": []}"#);
//! let reviews = vec![Review::from_text("They asked about binary trees.")];
//! let config = ExtractorConfig::default();
//!
//! let report = run_pipeline(&reviews, provider, ExtractionMethod::Ai, &config).await?;
//! println!("Found {} questions", report.result.total_questions());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregate;
mod chunking;
mod config;
mod engine;
mod error;
mod keyword;
mod parser;
mod prompt;
mod types;


pub use aggregate::aggregate;
pub use chunking::{estimate_review_tokens, ReviewChunker, CHARS_PER_TOKEN};
pub use config::ExtractorConfig;
pub use engine::{run_pipeline, AiExtractor};
pub use error::ExtractError;
pub use keyword::KeywordExtractor;
pub use parser::parse_ai_response;
pub use prompt::PromptBuilder;
pub use types::{Chunk, ChunkFailure, ChunkFragment, ExtractionReport, RunOutcome};
