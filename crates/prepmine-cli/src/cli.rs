//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prepmine - mine categorized interview questions from scraped reviews.
#[derive(Debug, Parser)]
#[command(name = "prepmine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary table (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract categorized questions from a reviews file
    Extract(ExtractArgs),

    /// Classify a single question string
    Classify(ClassifyArgs),

    /// Re-render a stored result file as a text report
    Report(ReportArgs),
}

/// Extraction method selection.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MethodArg {
    /// Language-model-based extraction
    Ai,
    /// Deterministic keyword/regex extraction
    Keyword,
}

impl From<MethodArg> for prepmine_domain::ExtractionMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Ai => prepmine_domain::ExtractionMethod::Ai,
            MethodArg::Keyword => prepmine_domain::ExtractionMethod::Keyword,
        }
    }
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Reviews JSON file (bare array or scraper output)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Extraction method
    #[arg(short, long, value_enum, default_value = "ai")]
    pub method: MethodArg,

    /// Model identifier (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Directory to write result files into
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Fall back to keyword extraction if every AI chunk fails
    #[arg(long)]
    pub fallback: bool,

    /// API key for the AI provider
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// The question to classify
    pub question: String,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Result JSON file produced by the extract command
    #[arg(short, long)]
    pub input: PathBuf,
}
