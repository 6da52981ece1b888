//! Question normalization and near-duplicate detection

use strsim::normalized_levenshtein;

/// Normalize a question for duplicate comparison
///
/// Case-folds, collapses internal whitespace runs, and trims surrounding
/// whitespace and trailing sentence punctuation. Two questions with equal
/// normalized forms are exact duplicates.
pub fn normalize(question: &str) -> String {
    let lowered = question.to_lowercase();
    let collapsed: String = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(['.', '!', '?', ','])
        .trim()
        .to_string()
}

/// Whether two normalized questions are near-duplicates
pub fn is_near_duplicate(a: &str, b: &str, threshold: f64) -> bool {
    if a == b {
        return true;
    }
    normalized_levenshtein(a, b) >= threshold
}
