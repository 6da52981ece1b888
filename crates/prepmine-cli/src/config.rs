//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use prepmine_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Extraction pipeline settings
    #[serde(default)]
    pub extraction: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary table
    Table,
    /// JSON format
    Json,
    /// Quiet (counts only) format
    Quiet,
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
            crate::cli::CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".prepmine").join("config.toml"))
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config
            .extraction
            .validate()
            .map_err(CliError::Config)?;
        Ok(config)
    }

    /// Load configuration from the default path, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Self::default();
            config.save().ok();
            Ok(config)
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert!(config.extraction.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[settings]\ncolor = false\n").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.settings.color);
        // Extraction section absent, so defaults apply
        assert_eq!(config.extraction.chunk_safety_margin, 0.8);
    }

    #[test]
    fn test_load_rejects_invalid_extraction_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"[extraction]\nmodel = \"m\"\nchunk_token_limit = 0\nchunk_safety_margin = 0.8\nrequest_delay_ms = 0\nrequest_timeout_secs = 1\nmax_retries = 0\nretry_backoff_ms = 1\nfallback_to_keyword = false\nsimilarity_threshold = 0.9\n",
        )
        .unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
