//! ExtractedQuestion module - a candidate question plus its category

use crate::Category;
use serde::{Deserialize, Serialize};

/// Minimum length of a valid question, in characters
pub const MIN_QUESTION_LEN: usize = 15;

/// Maximum length of a valid question, in characters
pub const MAX_QUESTION_LEN: usize = 300;

/// Maximum ratio of special (non-alphanumeric, non-space) characters
const MAX_SPECIAL_CHAR_RATIO: f64 = 0.3;

/// A candidate interview question produced by an extraction engine
///
/// Candidates only survive into the final result if they pass the quality
/// filter; `validate` enforces the intrinsic invariants (length and
/// meaningful content) that hold for every surviving question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedQuestion {
    /// The question text
    pub text: String,

    /// Assigned category
    pub category: Category,
}

/// Reason an extracted question fails its invariants
///
/// Validation failures are dropped silently by the pipeline; they are never
/// surfaced as run failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Question shorter than the minimum length
    TooShort {
        /// Actual char length
        len: usize,
    },

    /// Question longer than the maximum length
    TooLong {
        /// Actual char length
        len: usize,
    },

    /// Question is mostly punctuation/numbers or has no alphabetic content
    NoMeaningfulContent,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TooShort { len } => {
                write!(f, "question too short: {} chars (min {})", len, MIN_QUESTION_LEN)
            }
            ValidationError::TooLong { len } => {
                write!(f, "question too long: {} chars (max {})", len, MAX_QUESTION_LEN)
            }
            ValidationError::NoMeaningfulContent => {
                write!(f, "question has no meaningful content")
            }
        }
    }
}

impl ExtractedQuestion {
    /// Create a new candidate question
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Check the intrinsic invariants: length in [15, 300] and meaningful
    /// alphabetic content
    pub fn validate(&self) -> Result<(), ValidationError> {
        let len = self.text.chars().count();
        if len < MIN_QUESTION_LEN {
            return Err(ValidationError::TooShort { len });
        }
        if len > MAX_QUESTION_LEN {
            return Err(ValidationError::TooLong { len });
        }

        let alphabetic = self.text.chars().filter(|c| c.is_alphabetic()).count();
        if alphabetic == 0 {
            return Err(ValidationError::NoMeaningfulContent);
        }

        let special = self
            .text
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count();
        if special as f64 / len as f64 > MAX_SPECIAL_CHAR_RATIO {
            return Err(ValidationError::NoMeaningfulContent);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_question() {
        let q = ExtractedQuestion::new("Explain how a hash map resolves collisions", Category::Technical);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_too_short() {
        let q = ExtractedQuestion::new("Why Rust?", Category::Technical);
        assert_eq!(q.validate(), Err(ValidationError::TooShort { len: 9 }));
    }

    #[test]
    fn test_length_boundaries() {
        let exactly_min = "a".repeat(MIN_QUESTION_LEN);
        assert!(ExtractedQuestion::new(exactly_min, Category::Coding).validate().is_ok());

        let exactly_max = "b".repeat(MAX_QUESTION_LEN);
        assert!(ExtractedQuestion::new(exactly_max, Category::Coding).validate().is_ok());

        let over = "c".repeat(MAX_QUESTION_LEN + 1);
        let result = ExtractedQuestion::new(over, Category::Coding).validate();
        assert_eq!(result, Err(ValidationError::TooLong { len: MAX_QUESTION_LEN + 1 }));
    }

    #[test]
    fn test_only_punctuation_rejected() {
        let q = ExtractedQuestion::new("?!?!?!?!?!?!?!?!", Category::Coding);
        assert_eq!(q.validate(), Err(ValidationError::NoMeaningfulContent));
    }

    #[test]
    fn test_only_numbers_rejected() {
        let q = ExtractedQuestion::new("123 456 789 012 345", Category::Coding);
        assert_eq!(q.validate(), Err(ValidationError::NoMeaningfulContent));
    }

    #[test]
    fn test_mostly_special_chars_rejected() {
        let q = ExtractedQuestion::new("a+++===***###@@@!!!&&&%%%", Category::Coding);
        assert_eq!(q.validate(), Err(ValidationError::NoMeaningfulContent));
    }
}
