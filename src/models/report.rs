use serde::Serialize;

use crate::lang::{Language, ReportLabels};

use super::MarkerCounts;

/// The complete result of analyzing one transcript
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The trimmed transcript that was analyzed
    pub transcript: String,
    /// Language resolved from the request's declared code
    pub language: Language,
    /// Aggregate confidence as a percentage, rounded to 2 decimal places
    pub confidence_score: f64,
    /// Localized feedback for the confidence band
    pub confidence_feedback: String,
    /// Marker counts aggregated over the whole request
    pub confidence_markers: MarkerCounts,
    /// Spans that scored below the low-confidence threshold
    pub low_confidence_segments: Vec<FlaggedSegment>,
    /// Wall-clock analysis time in seconds, rounded to 3 decimal places
    pub processing_time: f64,
    /// Localized improvement suggestions, in a fixed rule order
    pub recommendations: Vec<String>,
    /// Presentation labels in the dominant language
    #[serde(rename = "templates")]
    pub labels: &'static ReportLabels,
}

/// A span flagged for scoring below the low-confidence threshold
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedSegment {
    /// The span's trimmed text
    pub text: String,
    /// The span's raw confidence score in [0, 1], unrounded
    pub confidence: f64,
    /// Language the span was analyzed with
    pub language: Language,
    /// Marker names with a non-zero count in this span
    pub issues: Vec<&'static str>,
}
