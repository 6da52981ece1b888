//! Merge chunk fragments into the final result

use crate::types::{ChunkFailure, ChunkFragment, ExtractionReport};
use prepmine_domain::{CategorizedResult, ExtractedQuestion, ExtractionMethod, RunId};
use prepmine_filter::{FilterConfig, QualityFilter};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Merge per-chunk fragments into a single `ExtractionReport`
///
/// Fragments merge in chunk order, then in-chunk order; the quality filter
/// runs exactly once over the merged sequence so duplicates that span chunk
/// boundaries are still caught. Deduplication state lives entirely inside
/// this single pass; the engines never share it.
pub fn aggregate(
    fragments: Vec<ChunkFragment>,
    failures: Vec<ChunkFailure>,
    review_count: usize,
    total_chunks: usize,
    method: ExtractionMethod,
    model: Option<String>,
    similarity_threshold: f64,
) -> ExtractionReport {
    let mut fragments = fragments;
    fragments.sort_by_key(|f| f.chunk_index);

    let merged: Vec<ExtractedQuestion> = fragments
        .into_iter()
        .flat_map(|f| f.questions)
        .collect();
    let candidate_count = merged.len();

    let filter = QualityFilter::new(FilterConfig {
        similarity_threshold,
        ..FilterConfig::default()
    });
    let survivors = filter.filter_and_dedupe(merged);

    info!(
        "Aggregated {} candidates into {} questions ({} chunks, {} failed)",
        candidate_count,
        survivors.len(),
        total_chunks,
        failures.len()
    );

    let generated_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let result = CategorizedResult::from_questions(
        survivors,
        RunId::new(),
        review_count,
        total_chunks,
        failures.len(),
        method,
        model,
        generated_at,
    );

    ExtractionReport { result, failures }
}
