use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AnalysisRequest;

/// Parse an analysis request from a JSON file
pub fn read_request_file(path: &Path) -> Result<AnalysisRequest> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_request_json(&content)
}

/// Parse an analysis request from a JSON string
pub fn parse_request_json(json: &str) -> Result<AnalysisRequest> {
    serde_json::from_str(json).context("Failed to parse request JSON")
}
