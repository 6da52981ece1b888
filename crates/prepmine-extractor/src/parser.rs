//! Parse AI output into per-category question lists

use crate::error::ExtractError;
use prepmine_domain::Category;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Parse an AI response into a category → questions map
///
/// Tolerates the common model quirks: markdown code fences are stripped,
/// unknown category keys are discarded with a warning, non-string array
/// entries are skipped, and missing categories default to empty lists. A
/// response that is not a JSON object at all is an `InvalidFormat` error;
/// the engine records it as a chunk failure rather than aborting the run.
pub fn parse_ai_response(response: &str) -> Result<BTreeMap<Category, Vec<String>>, ExtractError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractError::InvalidFormat("Expected JSON object".to_string()))?;

    let mut result: BTreeMap<Category, Vec<String>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for (key, value) in obj {
        let Some(category) = Category::parse(key) else {
            warn!("Discarding unknown category key '{}'", key);
            continue;
        };

        let Some(items) = value.as_array() else {
            warn!("Category '{}' is not an array, treating as empty", key);
            continue;
        };

        let questions = result.entry(category).or_default();
        for (idx, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(text) => questions.push(text.to_string()),
                None => warn!("Skipping non-string entry {} in category '{}'", idx, key),
            }
        }
    }

    Ok(result)
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
