//! Filter configuration

/// Default near-duplicate similarity threshold
///
/// Two normalized questions with a normalized Levenshtein similarity at or
/// above this value collapse into one. 0.9 is conservative: it merges
/// rewordings that differ by a few characters while keeping genuinely
/// distinct questions apart.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;

/// Substring markers for boilerplate/placeholder content
const DEFAULT_SPAM_MARKERS: &[&str] = &[
    "lorem",
    "ipsum",
    "placeholder",
    "no questions asked",
    "no question was asked",
    "sample question",
    "example question",
    "hi everyone",
    "hello everyone",
    "good luck",
];

/// Configuration for the quality filter
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Near-duplicate similarity threshold (0.0-1.0)
    pub similarity_threshold: f64,

    /// Case-insensitive substrings that mark a question as boilerplate
    pub spam_markers: Vec<String>,

    /// Enable the classifier-based relevance check
    pub check_relevance: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            spam_markers: DEFAULT_SPAM_MARKERS.iter().map(|s| s.to_string()).collect(),
            check_relevance: true,
        }
    }
}

impl FilterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(format!(
                "similarity_threshold {} outside [0.0, 1.0]",
                self.similarity_threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.similarity_threshold, DEFAULT_SIMILARITY_THRESHOLD);
        assert!(config.check_relevance);
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = FilterConfig::default();
        config.similarity_threshold = 1.5;
        assert!(config.validate().is_err());
    }
}
