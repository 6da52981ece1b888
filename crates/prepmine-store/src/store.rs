//! Review loading and the in-memory review collection

use crate::error::StoreError;
use prepmine_domain::traits::ReviewSource;
use prepmine_domain::Review;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Wrapper object shape produced by the scraper
///
/// The scraper writes `{"metadata": {...}, "interviews": [...]}`; other
/// tools in the original toolchain used a `reviews` key. Both are accepted.
#[derive(Deserialize)]
struct ReviewFile {
    #[serde(default, alias = "reviews")]
    interviews: Vec<Review>,
}

/// Load reviews from a JSON file, leniently
///
/// Accepts either a bare array of review objects or a wrapper object with
/// an `interviews`/`reviews` key. Unknown fields are ignored; optional
/// review fields default to `None`. An empty file of either shape loads as
/// zero reviews, which is a valid (if unproductive) pipeline input.
pub fn load_reviews(path: impl AsRef<Path>) -> Result<Vec<Review>, StoreError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let reviews = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<Review>>(value)?,
        serde_json::Value::Object(_) => serde_json::from_value::<ReviewFile>(value)?.interviews,
        other => {
            return Err(StoreError::InvalidReviewFile(format!(
                "expected array or object, got {}",
                match other {
                    serde_json::Value::Null => "null",
                    serde_json::Value::Bool(_) => "bool",
                    serde_json::Value::Number(_) => "number",
                    serde_json::Value::String(_) => "string",
                    _ => "other",
                }
            )))
        }
    };

    info!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// In-memory owner of the loaded review collection
///
/// Reviews are read-only once stored; the extraction pipeline borrows them
/// as an ordered slice.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already-loaded review sequence
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Load a store from a reviews JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self::from_reviews(load_reviews(path)?))
    }

    /// Append a review in scrape order
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Number of reviews held
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the store holds no reviews
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// The reviews as an ordered slice
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

/// File-backed implementation of the scraper boundary
///
/// Stands in for the live scraper in offline runs: the source identifier is
/// resolved against a base directory (or used as a path directly), and
/// `max_pages` is ignored since the file already holds a finished scrape.
#[derive(Debug, Clone, Default)]
pub struct FileReviewSource {
    base_dir: Option<PathBuf>,
}

impl FileReviewSource {
    /// Source resolving identifiers as plain paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Source resolving identifiers relative to a base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }
}

impl ReviewSource for FileReviewSource {
    type Error = StoreError;

    fn fetch_reviews(&self, source: &str, _max_pages: usize) -> Result<Vec<Review>, Self::Error> {
        let path = match &self.base_dir {
            Some(dir) => dir.join(source),
            None => PathBuf::from(source),
        };
        load_reviews(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_bare_array() {
        let file = write_temp(
            r#"[
                {"text": "Asked about SQL joins and indexing."},
                {"text": "Two coding rounds.", "difficulty": "Hard"}
            ]"#,
        );
        let reviews = load_reviews(file.path()).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].difficulty.as_deref(), Some("Hard"));
    }

    #[test]
    fn test_load_scraper_wrapper() {
        let file = write_temp(
            r#"{
                "metadata": {"company_url": "https://example.com", "pages": 3},
                "interviews": [
                    {"raw_text": "They asked me to implement a queue.", "position": "SDE"}
                ]
            }"#,
        );
        let reviews = load_reviews(file.path()).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].text, "They asked me to implement a queue.");
        assert_eq!(reviews[0].position.as_deref(), Some("SDE"));
    }

    #[test]
    fn test_load_reviews_key_alias() {
        let file = write_temp(r#"{"reviews": [{"text": "One behavioral round."}]}"#);
        let reviews = load_reviews(file.path()).unwrap();
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn test_load_wrapper_without_reviews_is_empty() {
        let file = write_temp(r#"{"metadata": {}}"#);
        let reviews = load_reviews(file.path()).unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_load_scalar_rejected() {
        let file = write_temp(r#""just a string""#);
        let result = load_reviews(file.path());
        assert!(matches!(result, Err(StoreError::InvalidReviewFile(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_reviews("/nonexistent/reviews.json");
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_file_review_source() {
        let file = write_temp(r#"[{"text": "Asked about load balancing."}]"#);
        let source = FileReviewSource::new();
        let reviews = source
            .fetch_reviews(file.path().to_str().unwrap(), 10)
            .unwrap();
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn test_store_ordering() {
        let mut store = ReviewStore::new();
        assert!(store.is_empty());
        store.push(Review::from_text("first"));
        store.push(Review::from_text("second"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.reviews()[0].text, "first");
        assert_eq!(store.reviews()[1].text, "second");
    }
}
