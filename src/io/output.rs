use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AnalysisReport;

impl AnalysisReport {
    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Format a report as human-readable text using its localized labels
pub fn render_summary(report: &AnalysisReport) -> String {
    let labels = report.labels;
    let mut output = String::new();

    output.push_str(&format!("{}\n", labels.analysis_summary));
    output.push_str(&format!("{}\n", "=".repeat(labels.analysis_summary.chars().count())));
    output.push_str(&format!("{:.2}% - {}\n\n", report.confidence_score, report.confidence_feedback));

    output.push_str(&format!("{}\n", labels.speech_markers));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.hesitations, report.confidence_markers.hesitations
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.repetitions, report.confidence_markers.repetitions
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.filler_count, report.confidence_markers.filler_words
    ));

    if !report.low_confidence_segments.is_empty() {
        output.push_str(&format!("\n{}\n", labels.areas_to_improve));
        for segment in &report.low_confidence_segments {
            output.push_str(&format!(
                "  [{:.2}] {} ({})\n",
                segment.confidence,
                segment.text,
                segment.issues.join(", ")
            ));
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str(&format!("\n{}\n", labels.recommendations));
        for recommendation in &report.recommendations {
            output.push_str(&format!("  - {}\n", recommendation));
        }
    }

    output
}
