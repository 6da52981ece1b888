//! Result export: structured JSON and the human-readable text report
//!
//! Both forms are pure projections of a `CategorizedResult`; no filtering
//! or aggregation logic lives here.

use crate::error::StoreError;
use prepmine_domain::{Category, CategorizedResult};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Write the result as pretty-printed JSON
pub fn save_json(result: &CategorizedResult, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)?;
    info!("Results saved to {}", path.display());
    Ok(())
}

/// Render the result as a human-readable text report
///
/// Categories render in priority order with questions numbered within each
/// category; empty categories are omitted from the body but still counted
/// in the summary.
pub fn render_report(result: &CategorizedResult) -> String {
    let meta = &result.metadata;
    let mut out = String::new();

    let title = "EXTRACTED INTERVIEW QUESTIONS";
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
    let _ = writeln!(out, "Run: {}", meta.run_id);
    let _ = writeln!(out, "Method: {}", meta.method);
    if let Some(model) = &meta.model {
        let _ = writeln!(out, "Model: {}", model);
    }
    let _ = writeln!(out, "Reviews processed: {}", meta.total_reviews);
    let _ = writeln!(
        out,
        "Chunks processed: {} ({} failed)",
        meta.total_chunks, meta.chunks_failed
    );
    let _ = writeln!(out);

    for category in Category::ALL {
        let questions = result.questions_in(category);
        if questions.is_empty() {
            continue;
        }

        let heading = category.heading();
        let _ = writeln!(out, "{}", heading);
        let _ = writeln!(out, "{}", "=".repeat(heading.len()));
        for (i, question) in questions.iter().enumerate() {
            let _ = writeln!(out, "{:2}. {}", i + 1, question);
        }
        let _ = writeln!(out, "\nTotal: {} questions\n", questions.len());
    }

    let _ = writeln!(out, "EXTRACTION SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat("EXTRACTION SUMMARY".len()));
    let _ = writeln!(out, "Total questions: {}", meta.total_questions);
    for category in Category::ALL {
        let count = meta.category_counts.get(&category).copied().unwrap_or(0);
        if count > 0 {
            let _ = writeln!(out, "  {}: {}", category, count);
        }
    }

    out
}

/// Write the text report to a file
pub fn save_report(result: &CategorizedResult, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    std::fs::write(path, render_report(result))?;
    info!("Report saved to {}", path.display());
    Ok(())
}
