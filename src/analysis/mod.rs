pub mod detector;
pub mod scorer;
pub mod segments;

pub use detector::*;
pub use scorer::*;
pub use segments::*;

use std::time::Instant;

use tracing::debug;

use crate::error::AnalysisError;
use crate::feedback::compose;
use crate::lang::Language;
use crate::models::{AnalysisReport, AnalysisRequest};

/// Analyze one request end to end
///
/// Resolves the declared language, runs the segment or whole-transcript
/// pass, then composes localized feedback in the dominant language. The
/// computation is pure and synchronous; identical requests produce
/// identical reports (modulo `processing_time`).
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
    let started = Instant::now();

    let transcript = request.transcript.trim();
    if transcript.is_empty() {
        return Err(AnalysisError::EmptyTranscript);
    }

    let language = Language::resolve(&request.language);

    let analysis = if request.language_segments.is_empty() {
        debug!("Single-language analysis in {}", language);
        analyze_single(transcript, language)
    } else {
        debug!(
            "Multi-language analysis over {} segments",
            request.language_segments.len()
        );
        analyze_segments(&request.language_segments, language)
    };

    // Feedback language: dominant across segments by word count, or the
    // declared language when no segments were supplied
    let feedback_language = if request.language_segments.is_empty() {
        language
    } else {
        dominant_language(&request.language_segments, language)
    };

    let confidence_pct = round2(analysis.score * 100.0);
    let feedback = compose(confidence_pct, &analysis.markers, transcript, feedback_language);

    Ok(AnalysisReport {
        transcript: transcript.to_string(),
        language,
        confidence_score: confidence_pct,
        confidence_feedback: feedback.feedback,
        confidence_markers: analysis.markers,
        low_confidence_segments: analysis.flagged,
        processing_time: round3(started.elapsed().as_secs_f64()),
        recommendations: feedback.recommendations,
        labels: feedback_language.labels(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
