//! Deterministic keyword/regex extraction engine
//!
//! The fallback path when AI extraction is unavailable or disabled. Harvests
//! question-like sentences from review text with regex patterns, cleans
//! them up, and classifies each with the weighted keyword classifier. Pure
//! and infallible once constructed; produces the same `ChunkFragment` shape
//! as the AI engine.

use crate::chunking::ReviewChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::types::{Chunk, ChunkFragment, ExtractionReport};
use prepmine_domain::{ExtractedQuestion, ExtractionMethod, Review};
use regex::Regex;
use tracing::info;

/// Phrasings that introduce a question in review prose
const QUESTION_PATTERNS: &[&str] = &[
    r"(?i)asked\s+(?:me\s+)?(?:about\s+)?([^.!?]+[?.])",
    r"(?i)question\s+(?:was\s+)?(?:about\s+)?([^.!?]+[?.])",
    r"(?i)they\s+asked\s+([^.!?]+[?.])",
    r"(?i)interviewer\s+asked\s+([^.!?]+[?.])",
    r"(?i)was\s+asked\s+([^.!?]+[?.])",
    r"(?i)questions?\s*:\s*([^.!?\n]+)",
    r"(?i)problem\s*:\s*([^.!?\n]+)",
];

/// The keyword extraction engine
pub struct KeywordExtractor {
    patterns: Vec<Regex>,
}

impl KeywordExtractor {
    /// Compile the question-harvesting patterns
    pub fn new() -> Result<Self, ExtractError> {
        let patterns = QUESTION_PATTERNS
            .iter()
            .map(|p| Regex::new(p).map_err(|e| ExtractError::Config(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Run extraction over the full review sequence
    ///
    /// Uses the same chunker as the AI path so run metadata is comparable;
    /// no chunk can fail on this path.
    pub fn run(&self, reviews: &[Review], config: &ExtractorConfig) -> ExtractionReport {
        let chunker = ReviewChunker::new(config.chunk_token_limit, config.chunk_safety_margin);
        let chunks = chunker.chunk(reviews);

        info!(
            "Starting keyword extraction: {} reviews in {} chunks",
            reviews.len(),
            chunks.len()
        );

        let fragments: Vec<ChunkFragment> =
            chunks.iter().map(|chunk| self.extract_chunk(chunk)).collect();

        crate::aggregate::aggregate(
            fragments,
            Vec::new(),
            reviews.len(),
            chunks.len(),
            ExtractionMethod::Keyword,
            None,
            config.similarity_threshold,
        )
    }

    /// Extract candidate questions from a single chunk
    pub fn extract_chunk(&self, chunk: &Chunk<'_>) -> ChunkFragment {
        let mut questions = Vec::new();

        for review in chunk.reviews {
            for pattern in &self.patterns {
                for captures in pattern.captures_iter(&review.text) {
                    let Some(matched) = captures.get(1) else {
                        continue;
                    };
                    let cleaned = clean_question(matched.as_str());
                    let candidate =
                        ExtractedQuestion::new(&cleaned, prepmine_classifier::classify(&cleaned));
                    if candidate.validate().is_ok() {
                        questions.push(candidate);
                    }
                }
            }
        }

        ChunkFragment {
            chunk_index: chunk.index,
            questions,
        }
    }
}

/// Normalize a harvested question fragment
///
/// Collapses whitespace, trims surrounding punctuation, and capitalizes the
/// first letter.
fn clean_question(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches(['.', ',', '!', '?', ' ']);

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(texts: &[&str]) -> Vec<ExtractedQuestion> {
        let reviews: Vec<Review> = texts.iter().map(|t| Review::from_text(*t)).collect();
        let chunker = ReviewChunker::new(100_000, 0.8);
        let chunks = chunker.chunk(&reviews);
        let extractor = KeywordExtractor::new().unwrap();
        chunks
            .iter()
            .flat_map(|c| extractor.extract_chunk(c).questions)
            .collect()
    }

    #[test]
    fn test_clean_question() {
        assert_eq!(
            clean_question("  what   is a closure?  "),
            "What is a closure"
        );
        assert_eq!(clean_question("explain joins."), "Explain joins");
    }

    #[test]
    fn test_harvests_asked_phrasing() {
        let questions = extract_from(&[
            "They asked what sorting algorithm works best for nearly sorted arrays.",
        ]);
        assert!(!questions.is_empty());
        assert!(questions[0]
            .text
            .contains("sorting algorithm works best for nearly sorted arrays"));
    }

    #[test]
    fn test_harvests_interviewer_phrasing() {
        let questions = extract_from(&[
            "The interviewer asked me to write a SQL query to find duplicate records.",
        ]);
        assert!(!questions.is_empty());
        assert!(questions
            .iter()
            .any(|q| q.category == prepmine_domain::Category::Sql));
    }

    #[test]
    fn test_harvests_colon_phrasing() {
        let questions =
            extract_from(&["Coding question: implement a stack that returns its minimum in O(1)"]);
        assert!(!questions.is_empty());
        assert_eq!(questions[0].category, prepmine_domain::Category::Coding);
    }

    #[test]
    fn test_ignores_prose_without_question_markers() {
        let questions = extract_from(&[
            "The office was nice and the process took two weeks overall.",
        ]);
        assert!(questions.is_empty());
    }

    #[test]
    fn test_short_fragments_dropped() {
        // The capture is under the 15-char minimum once cleaned
        let questions = extract_from(&["They asked me this."]);
        assert!(questions.is_empty());
    }
}
