//! Prepmine Quality Filter
//!
//! Validates, deduplicates, and relevance-checks extracted questions before
//! they reach the final result.
//!
//! The filter provides:
//! - Intrinsic validation (length, meaningful content)
//! - Spam/boilerplate rejection
//! - Cross-chunk deduplication (exact and near-duplicate collapse)
//! - A relevance safety net against off-topic AI output
//!
//! # Examples
//!
//! ```
//! use prepmine_filter::{FilterConfig, QualityFilter};
//! use prepmine_domain::{Category, ExtractedQuestion};
//!
//! let filter = QualityFilter::new(FilterConfig::default());
//! let survivors = filter.filter_and_dedupe(vec![
//!     ExtractedQuestion::new("Explain different types of JOINs in SQL", Category::Sql),
//!     ExtractedQuestion::new("explain different types of joins in sql", Category::Sql),
//! ]);
//! assert_eq!(survivors.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod dedupe;
mod filter;

pub use config::FilterConfig;
pub use filter::{QualityFilter, RejectionReason};
