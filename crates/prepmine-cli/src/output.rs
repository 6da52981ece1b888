//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use prepmine_domain::{Category, CategorizedResult};
use prepmine_extractor::{ExtractionReport, RunOutcome};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction report.
    pub fn format_report(&self, report: &ExtractionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.result)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report.result.total_questions().to_string()),
        }
    }

    /// Format the report as a summary table plus outcome lines.
    fn format_report_table(&self, report: &ExtractionReport) -> String {
        let result = &report.result;
        let mut out = String::new();

        let mut builder = Builder::default();
        builder.push_record(["Category", "Questions"]);
        for category in Category::ALL {
            builder.push_record([
                category.as_str(),
                &result.questions_in(category).len().to_string(),
            ]);
        }
        builder.push_record(["total", &result.total_questions().to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        out.push_str(&table.to_string());
        out.push('\n');

        let meta = &result.metadata;
        out.push_str(&format!(
            "{} reviews, {} chunks, method: {}\n",
            meta.total_reviews, meta.total_chunks, meta.method
        ));

        match report.outcome() {
            RunOutcome::Complete => {
                out.push_str(&self.success(&format!(
                    "Extracted {} questions",
                    result.total_questions()
                )));
            }
            RunOutcome::NoReviews => {
                out.push_str(&self.warning("No reviews to process"));
            }
            RunOutcome::Partial => {
                out.push_str(&self.warning(&format!(
                    "{} of {} chunks failed; partial results returned",
                    meta.chunks_failed, meta.total_chunks
                )));
            }
            RunOutcome::AllChunksFailed => {
                out.push_str(&self.error("Every chunk failed; no results extracted"));
            }
        }
        out.push('\n');

        for failure in &report.failures {
            out.push_str(&format!(
                "  chunk {}: {}\n",
                failure.chunk_index + 1,
                failure.reason
            ));
        }

        out
    }

    /// Format a classification result.
    pub fn format_classification(&self, question: &str, category: Category) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "question": question,
                "category": category,
            }))?),
            OutputFormat::Quiet => Ok(category.as_str().to_string()),
            OutputFormat::Table => Ok(format!(
                "{} → {}",
                question,
                self.colorize(category.as_str(), "cyan")
            )),
        }
    }

    /// Format a stored result for the report command.
    pub fn format_stored_result(&self, result: &CategorizedResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            _ => Ok(prepmine_store::render_report(result)),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
