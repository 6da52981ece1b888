//! Review chunking under an estimated token budget

use crate::types::Chunk;
use prepmine_domain::Review;

/// Approximate characters per token
///
/// Cheap proxy for real tokenization: monotonic in text length and
/// deterministic, which is all the packing algorithm needs.
pub const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token cost of one review inside a prompt
///
/// Based on the review's prompt rendering, so metadata lines count toward
/// the budget too. The interview number in the header contributes a couple
/// of characters of jitter, which the safety margin absorbs.
pub fn estimate_review_tokens(review: &Review) -> usize {
    review.prompt_text(0).chars().count() / CHARS_PER_TOKEN
}

/// Packs reviews into ordered chunks bounded by the token budget
pub struct ReviewChunker {
    token_limit: usize,
    safety_margin: f64,
}

impl ReviewChunker {
    /// Create a chunker for the given limit and margin
    ///
    /// The margin is the fraction of the limit actually spent; callers
    /// validate the values via `ExtractorConfig::validate`.
    pub fn new(token_limit: usize, safety_margin: f64) -> Self {
        Self {
            token_limit,
            safety_margin,
        }
    }

    /// The effective per-chunk budget in tokens
    pub fn budget(&self) -> usize {
        (self.token_limit as f64 * self.safety_margin) as usize
    }

    /// Split reviews into ordered chunks
    ///
    /// Greedy in-order packing: the current chunk closes when adding the
    /// next review would push it over budget. A single review that alone
    /// exceeds the budget still forms its own singleton chunk; it is never
    /// split or dropped. Empty input yields zero chunks.
    pub fn chunk<'a>(&self, reviews: &'a [Review]) -> Vec<Chunk<'a>> {
        let budget = self.budget();
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut current_tokens = 0;

        for (i, review) in reviews.iter().enumerate() {
            let tokens = estimate_review_tokens(review);
            if i > start && current_tokens + tokens > budget {
                chunks.push(Chunk {
                    index: chunks.len(),
                    reviews: &reviews[start..i],
                    estimated_tokens: current_tokens,
                });
                start = i;
                current_tokens = 0;
            }
            current_tokens += tokens;
        }

        if start < reviews.len() {
            chunks.push(Chunk {
                index: chunks.len(),
                reviews: &reviews[start..],
                estimated_tokens: current_tokens,
            });
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_of_len(chars: usize) -> Review {
        Review::from_text("x".repeat(chars))
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunker = ReviewChunker::new(1_000, 0.8);
        assert!(chunker.chunk(&[]).is_empty());
    }

    #[test]
    fn test_all_reviews_fit_one_chunk() {
        let chunker = ReviewChunker::new(10_000, 0.8);
        let reviews: Vec<Review> = (0..5).map(|_| review_of_len(100)).collect();
        let chunks = chunker.chunk(&reviews);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 5);
    }

    #[test]
    fn test_concatenation_preserves_order_and_coverage() {
        let chunker = ReviewChunker::new(200, 0.8);
        let reviews: Vec<Review> = (0..20)
            .map(|i| Review::from_text(format!("review number {} {}", i, "pad ".repeat(i * 7))))
            .collect();
        let chunks = chunker.chunk(&reviews);

        let rejoined: Vec<&Review> = chunks.iter().flat_map(|c| c.reviews.iter()).collect();
        assert_eq!(rejoined.len(), reviews.len());
        for (original, chunked) in reviews.iter().zip(rejoined) {
            assert_eq!(original, chunked);
        }
    }

    #[test]
    fn test_no_chunk_is_empty() {
        let chunker = ReviewChunker::new(100, 0.8);
        let reviews: Vec<Review> = (0..10).map(|_| review_of_len(300)).collect();
        let chunks = chunker.chunk(&reviews);
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_budget_respected_or_singleton() {
        let chunker = ReviewChunker::new(300, 0.8);
        let reviews: Vec<Review> = vec![
            review_of_len(200),
            review_of_len(200),
            review_of_len(200),
            review_of_len(5_000), // alone exceeds the budget
            review_of_len(200),
        ];
        let chunks = chunker.chunk(&reviews);

        for chunk in &chunks {
            assert!(
                chunk.estimated_tokens <= chunker.budget() || chunk.len() == 1,
                "chunk {} over budget with {} reviews",
                chunk.index,
                chunk.len()
            );
        }
    }

    #[test]
    fn test_oversized_review_is_singleton_chunk() {
        let chunker = ReviewChunker::new(100, 0.8);
        let reviews = vec![review_of_len(10_000)];
        let chunks = chunker.chunk(&reviews);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 1);
        assert!(chunks[0].estimated_tokens > chunker.budget());
    }

    #[test]
    fn test_chunk_indices_are_sequential() {
        let chunker = ReviewChunker::new(150, 0.8);
        let reviews: Vec<Review> = (0..8).map(|_| review_of_len(400)).collect();
        let chunks = chunker.chunk(&reviews);
        for (expected, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, expected);
        }
    }

    #[test]
    fn test_estimate_is_monotonic() {
        let short = estimate_review_tokens(&review_of_len(100));
        let long = estimate_review_tokens(&review_of_len(1_000));
        assert!(long > short);
    }
}
