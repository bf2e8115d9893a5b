use crate::error::{AgriskError, Result};
use crate::types::scoring::AssessmentInput;
use std::path::Path;

pub fn read_inputs(path: &Path) -> Result<Vec<AssessmentInput>> {
    if !path.exists() {
        return Err(AgriskError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let inputs = parse_inputs(&content)?;
    tracing::info!(path = %path.display(), count = inputs.len(), "batch inputs loaded");
    Ok(inputs)
}

/// Accepts a JSON array of inputs or JSON Lines with one input per line.
pub fn parse_inputs(content: &str) -> Result<Vec<AssessmentInput>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<AssessmentInput>>(content).map_err(|e| {
            AgriskError::BatchParse {
                line: e.line(),
                message: e.to_string(),
            }
        });
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<AssessmentInput>(line).map_err(|e| {
                AgriskError::BatchParse {
                    line: index + 1,
                    message: e.to_string(),
                }
            })
        })
        .collect()
}
