//! Prepmine Store
//!
//! Persistence for the pipeline's inputs and outputs: loading scraped
//! review files, owning the in-memory review collection, and exporting a
//! `CategorizedResult` in both machine-readable (JSON) and human-readable
//! (text report) forms.
//!
//! Review files deserialize leniently: either a bare JSON array of reviews
//! or the scraper's wrapper object (`{"metadata": ..., "interviews": [...]}`)
//! is accepted, unknown fields are ignored, and missing optional fields
//! default.

#![warn(missing_docs)]

mod error;
mod report;
mod store;

pub use error::StoreError;
pub use report::{render_report, save_json, save_report};
pub use store::{load_reviews, FileReviewSource, ReviewStore};
