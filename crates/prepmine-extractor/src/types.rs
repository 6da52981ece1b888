//! Pipeline-internal types: chunks, fragments, and the run report

use prepmine_domain::{CategorizedResult, ExtractedQuestion, Review};

/// An ordered, non-empty batch of reviews bounded by the token budget
///
/// Chunks borrow contiguous slices of the source review sequence; every
/// review lands in exactly one chunk, in order.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    /// Position of this chunk in the run (0-based)
    pub index: usize,

    /// The reviews in this chunk, in scrape order
    pub reviews: &'a [Review],

    /// Estimated token size of the chunk's prompt rendering
    pub estimated_tokens: usize,
}

impl Chunk<'_> {
    /// Number of reviews in the chunk
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Chunks are never empty; kept for slice-like symmetry
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Questions extracted from a single chunk, before quality filtering
#[derive(Debug, Clone)]
pub struct ChunkFragment {
    /// Index of the chunk this fragment came from
    pub chunk_index: usize,

    /// Candidate questions in extraction order
    pub questions: Vec<ExtractedQuestion>,
}

/// A chunk whose extraction failed
///
/// Recorded in the run report, never raised: one chunk's failure must not
/// abort its siblings.
#[derive(Debug, Clone)]
pub struct ChunkFailure {
    /// Index of the failed chunk
    pub chunk_index: usize,

    /// What went wrong, as a display string
    pub reason: String,
}

/// How an extraction run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The review store was empty; nothing to do
    NoReviews,

    /// Every chunk succeeded
    Complete,

    /// Some chunks failed, some succeeded; partial results returned
    Partial,

    /// Every chunk failed; the result carries no questions
    AllChunksFailed,
}

/// The full outcome of an extraction run
///
/// Always a successful return: callers inspect `outcome()` to distinguish
/// "ran but found nothing" from "the AI collaborator was unreachable".
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// The final filtered, deduplicated result
    pub result: CategorizedResult,

    /// Chunks that failed, with reasons
    pub failures: Vec<ChunkFailure>,
}

impl ExtractionReport {
    /// Classify how the run ended
    pub fn outcome(&self) -> RunOutcome {
        let meta = &self.result.metadata;
        if meta.total_reviews == 0 {
            RunOutcome::NoReviews
        } else if meta.chunks_failed == 0 {
            RunOutcome::Complete
        } else if meta.chunks_failed == meta.total_chunks {
            RunOutcome::AllChunksFailed
        } else {
            RunOutcome::Partial
        }
    }
}
