//! Staged question filtering

use crate::config::FilterConfig;
use crate::dedupe::{is_near_duplicate, normalize};
use prepmine_domain::{Category, ExtractedQuestion, ValidationError};
use std::collections::HashMap;
use thiserror::Error;

/// Why a candidate question was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectionReason {
    /// Failed an intrinsic invariant (length, meaningful content)
    #[error("invalid question: {0}")]
    Invalid(ValidationError),

    /// Matched a boilerplate/placeholder marker
    #[error("boilerplate marker '{marker}' matched")]
    Spam {
        /// The marker that matched
        marker: String,
    },

    /// Duplicate of an earlier question in the same category
    #[error("duplicate of '{first_seen}'")]
    Duplicate {
        /// The question it duplicates (normalized form)
        first_seen: String,
    },

    /// Zero classifier score in every category
    #[error("no category signal")]
    OffTopic,
}

/// The quality filter: validation, spam rejection, dedup, relevance
///
/// Pure and order-preserving. This is the only component that deduplicates
/// across chunks: each extraction engine only ever sees one chunk, so the
/// aggregator runs the filter exactly once over the merged sequence.
pub struct QualityFilter {
    config: FilterConfig,
}

impl QualityFilter {
    /// Create a filter with the given configuration
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Create a filter with default configuration
    pub fn default_config() -> Self {
        Self::new(FilterConfig::default())
    }

    /// Apply all stages in order, keeping first-seen survivors
    ///
    /// Idempotent: filtering an already-filtered sequence returns it
    /// unchanged.
    pub fn filter_and_dedupe(&self, questions: Vec<ExtractedQuestion>) -> Vec<ExtractedQuestion> {
        let mut survivors: Vec<ExtractedQuestion> = Vec::new();
        // Normalized forms of survivors, per category
        let mut seen: HashMap<Category, Vec<String>> = HashMap::new();

        for question in questions {
            match self.check(&question, &seen) {
                Ok(normalized) => {
                    seen.entry(question.category).or_default().push(normalized);
                    survivors.push(question);
                }
                Err(_) => continue,
            }
        }

        survivors
    }

    /// Run every stage against one candidate
    ///
    /// Returns the candidate's normalized form on success so the caller can
    /// record it in the dedup state.
    fn check(
        &self,
        question: &ExtractedQuestion,
        seen: &HashMap<Category, Vec<String>>,
    ) -> Result<String, RejectionReason> {
        // Stage 1: intrinsic invariants
        question.validate().map_err(RejectionReason::Invalid)?;

        // Stage 2: spam/boilerplate markers
        let lowered = question.text.to_lowercase();
        for marker in &self.config.spam_markers {
            if lowered.contains(marker.as_str()) {
                return Err(RejectionReason::Spam {
                    marker: marker.clone(),
                });
            }
        }

        // Stage 3: dedup within category, exact or near-duplicate
        let normalized = normalize(&question.text);
        if let Some(kept) = seen.get(&question.category) {
            for earlier in kept {
                if is_near_duplicate(earlier, &normalized, self.config.similarity_threshold) {
                    return Err(RejectionReason::Duplicate {
                        first_seen: earlier.clone(),
                    });
                }
            }
        }

        // Stage 4: relevance safety net against hallucinated content
        if self.config.check_relevance && prepmine_classifier::max_score(&question.text) == 0 {
            return Err(RejectionReason::OffTopic);
        }

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, category: Category) -> ExtractedQuestion {
        ExtractedQuestion::new(text, category)
    }

    #[test]
    fn test_short_question_dropped() {
        let filter = QualityFilter::default_config();
        // 10 chars
        let survivors = filter.filter_and_dedupe(vec![q("Sort this!", Category::Coding)]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_overlong_question_dropped() {
        let filter = QualityFilter::default_config();
        let text = format!("Implement an algorithm {}", "x".repeat(301));
        let survivors = filter.filter_and_dedupe(vec![q(&text, Category::Coding)]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_spam_markers_dropped() {
        let filter = QualityFilter::default_config();
        let survivors = filter.filter_and_dedupe(vec![
            q("Lorem ipsum dolor sit amet question", Category::Behavioral),
            q("There were no questions asked in this round", Category::Hr),
        ]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_case_whitespace_duplicates_collapse() {
        let filter = QualityFilter::default_config();
        let survivors = filter.filter_and_dedupe(vec![
            q("Explain different types of JOINs in SQL", Category::Sql),
            q("explain   different types of joins in sql", Category::Sql),
        ]);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].text, "Explain different types of JOINs in SQL");
    }

    #[test]
    fn test_near_duplicates_collapse() {
        let filter = QualityFilter::default_config();
        let survivors = filter.filter_and_dedupe(vec![
            q("Write a SQL query to find the second highest salary", Category::Sql),
            q("Write a SQL query to find the second highest salary.", Category::Sql),
            q("Write an SQL query to find the second highest salary", Category::Sql),
        ]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_same_text_different_category_kept() {
        // Dedup is scoped per category
        let filter = QualityFilter::default_config();
        let survivors = filter.filter_and_dedupe(vec![
            q("Explain indexing strategy for a large database", Category::Sql),
            q("Explain indexing strategy for a large database", Category::Technical),
        ]);
        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn test_off_topic_dropped() {
        let filter = QualityFilter::default_config();
        let survivors = filter.filter_and_dedupe(vec![q(
            "Describe your favorite breakfast cereal in detail",
            Category::Coding,
        )]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_relevance_check_can_be_disabled() {
        let mut config = FilterConfig::default();
        config.check_relevance = false;
        let filter = QualityFilter::new(config);
        let survivors = filter.filter_and_dedupe(vec![q(
            "Describe your favorite breakfast cereal in detail",
            Category::Coding,
        )]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let filter = QualityFilter::default_config();
        let survivors = filter.filter_and_dedupe(vec![
            q("Implement a binary search over a sorted array", Category::Coding),
            q("Explain different types of JOINs in SQL", Category::Sql),
            q("Tell me about a conflict you resolved in your team", Category::Behavioral),
        ]);
        assert_eq!(survivors.len(), 3);
        assert_eq!(survivors[0].category, Category::Coding);
        assert_eq!(survivors[1].category, Category::Sql);
        assert_eq!(survivors[2].category, Category::Behavioral);
    }

    #[test]
    fn test_idempotent() {
        let filter = QualityFilter::default_config();
        let input = vec![
            q("Implement a binary search over a sorted array", Category::Coding),
            q("implement a binary search over a sorted array", Category::Coding),
            q("Explain different types of JOINs in SQL", Category::Sql),
        ];
        let once = filter.filter_and_dedupe(input);
        let twice = filter.filter_and_dedupe(once.clone());
        assert_eq!(once, twice);
    }
}
