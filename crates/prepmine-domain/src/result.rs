//! CategorizedResult module - the final categorized question set

use crate::{Category, ExtractedQuestion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for an extraction run based on UUIDv7
///
/// UUIDv7 keeps run ids chronologically sortable, so output files and logs
/// from successive runs order naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u128);

impl RunId {
    /// Generate a new UUIDv7-based RunId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse a RunId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid run id: {}", e))
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for RunId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RunId::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Which extraction engine produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Language-model-based extraction
    Ai,
    /// Deterministic keyword/regex extraction
    Keyword,
}

impl ExtractionMethod {
    /// Get the method name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::Ai => "ai",
            ExtractionMethod::Keyword => "keyword",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata describing an extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Unique run identifier
    pub run_id: RunId,

    /// Number of reviews processed
    pub total_reviews: usize,

    /// Number of chunks submitted
    pub total_chunks: usize,

    /// Number of chunks whose extraction failed
    pub chunks_failed: usize,

    /// Total questions surviving the quality filter
    pub total_questions: usize,

    /// Surviving question count per category
    pub category_counts: BTreeMap<Category, usize>,

    /// total_questions / total_reviews, 0 when no reviews were processed
    pub extraction_rate: f64,

    /// Extraction engine used
    pub method: ExtractionMethod,

    /// Model identifier, present for AI runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Unix timestamp (seconds) when the result was assembled
    pub generated_at: u64,
}

/// The final deduplicated, categorized question set
///
/// Every category key is present even when its question list is empty.
/// Question order within a category is first-seen extraction order; the
/// quality filter has already removed duplicates and invalid candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedResult {
    /// Questions per category, in priority order
    pub questions: BTreeMap<Category, Vec<String>>,

    /// Run metadata
    pub metadata: ResultMetadata,
}

impl CategorizedResult {
    /// Build a result from surviving questions plus run statistics
    ///
    /// `questions` is the filtered, deduplicated sequence in final order.
    /// Per-category counts, the total, and the extraction rate are computed
    /// here so the metadata can never drift from the question map.
    #[allow(clippy::too_many_arguments)]
    pub fn from_questions(
        questions: Vec<ExtractedQuestion>,
        run_id: RunId,
        total_reviews: usize,
        total_chunks: usize,
        chunks_failed: usize,
        method: ExtractionMethod,
        model: Option<String>,
        generated_at: u64,
    ) -> Self {
        let mut map: BTreeMap<Category, Vec<String>> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        for q in questions {
            map.entry(q.category).or_default().push(q.text);
        }

        let category_counts: BTreeMap<Category, usize> =
            map.iter().map(|(c, qs)| (*c, qs.len())).collect();
        let total_questions: usize = category_counts.values().sum();
        let extraction_rate = if total_reviews == 0 {
            0.0
        } else {
            total_questions as f64 / total_reviews as f64
        };

        Self {
            questions: map,
            metadata: ResultMetadata {
                run_id,
                total_reviews,
                total_chunks,
                chunks_failed,
                total_questions,
                category_counts,
                extraction_rate,
                method,
                model,
                generated_at,
            },
        }
    }

    /// Questions in the given category (empty slice if none survived)
    pub fn questions_in(&self, category: Category) -> &[String] {
        self.questions.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total surviving questions across all categories
    pub fn total_questions(&self) -> usize {
        self.metadata.total_questions
    }

    /// Whether the run produced no questions at all
    pub fn is_empty(&self) -> bool {
        self.metadata.total_questions == 0
    }
}
