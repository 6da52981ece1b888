//! Review module - one scraped interview report

use serde::{Deserialize, Serialize};

/// A single interview review as produced by the scraper
///
/// Reviews are value objects: they carry no natural key and are ordered by
/// scrape sequence. Once produced they are read-only to the extraction
/// pipeline.
///
/// Deserialization is lenient: unknown fields are ignored and every field
/// except `text` defaults to `None`. The legacy `raw_text` key from older
/// scrape files is accepted as an alias for `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Free-text body of the review
    #[serde(alias = "raw_text")]
    pub text: String,

    /// Position the candidate interviewed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Candidate experience level as reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    /// Difficulty rating as reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    /// Interview outcome (offer, rejected, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    /// Date of the interview as reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Review {
    /// Create a review from body text only
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: None,
            experience: None,
            difficulty: None,
            outcome: None,
            date: None,
        }
    }

    /// Render the review as a block of prompt text
    ///
    /// This is the exact form the review takes inside an extraction prompt,
    /// and the form its token estimate is computed from. Missing optional
    /// fields render as `N/A`.
    pub fn prompt_text(&self, index: usize) -> String {
        let na = "N/A";
        format!(
            "--- INTERVIEW {} ---\n\
             Position: {}\n\
             Experience: {}\n\
             Difficulty: {}\n\
             Outcome: {}\n\
             Content: {}\n",
            index + 1,
            self.position.as_deref().unwrap_or(na),
            self.experience.as_deref().unwrap_or(na),
            self.difficulty.as_deref().unwrap_or(na),
            self.outcome.as_deref().unwrap_or(na),
            self.text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let review: Review = serde_json::from_str(r#"{"text": "They asked about arrays."}"#).unwrap();
        assert_eq!(review.text, "They asked about arrays.");
        assert!(review.position.is_none());
        assert!(review.date.is_none());
    }

    #[test]
    fn test_deserialize_legacy_raw_text_key() {
        let review: Review =
            serde_json::from_str(r#"{"raw_text": "Asked to reverse a linked list."}"#).unwrap();
        assert_eq!(review.text, "Asked to reverse a linked list.");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "text": "Two rounds, one coding.",
            "position": "Backend Engineer",
            "text_length": 21,
            "extracted_at": "2025-06-01T10:00:00"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.position.as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn test_prompt_text_defaults_missing_fields() {
        let review = Review::from_text("Asked about SQL joins.");
        let block = review.prompt_text(0);
        assert!(block.contains("--- INTERVIEW 1 ---"));
        assert!(block.contains("Position: N/A"));
        assert!(block.contains("Content: Asked about SQL joins."));
    }

    #[test]
    fn test_prompt_text_includes_metadata() {
        let mut review = Review::from_text("Asked about SQL joins.");
        review.position = Some("Data Engineer".to_string());
        review.difficulty = Some("Hard".to_string());
        let block = review.prompt_text(2);
        assert!(block.contains("--- INTERVIEW 3 ---"));
        assert!(block.contains("Position: Data Engineer"));
        assert!(block.contains("Difficulty: Hard"));
    }
}
