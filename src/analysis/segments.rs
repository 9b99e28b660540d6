use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::lang::Language;
use crate::models::{FlaggedSegment, MarkerCounts, RawSegment};

use super::{detect, is_low_confidence, score};

/// Sentence boundaries for the single-language flagging pass
static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Aggregate result of one analysis pass over a request's text
#[derive(Debug, Clone)]
pub struct SegmentAnalysis {
    /// Aggregate confidence score in [0, 1]
    pub score: f64,
    /// Marker counts summed over everything that was scored
    pub markers: MarkerCounts,
    /// Spans that scored below the low-confidence threshold, in input order
    pub flagged: Vec<FlaggedSegment>,
}

/// Analyze externally supplied language segments
///
/// Each well-formed, non-empty segment is detected and scored in its own
/// language; the aggregate score is the arithmetic mean over the scored
/// segments. Malformed or blank segments are skipped, never fatal. Unknown
/// segment languages resolve to `fallback`.
pub fn analyze_segments(segments: &[RawSegment], fallback: Language) -> SegmentAnalysis {
    let mut total_confidence = 0.0;
    let mut scored_count = 0usize;
    let mut markers = MarkerCounts::default();
    let mut flagged = Vec::new();

    for segment in segments {
        let (Some(code), Some(text)) = (&segment.language, &segment.text) else {
            debug!("Skipping malformed segment: {:?}", segment);
            continue;
        };

        let language = Language::resolve_or(code, fallback);
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let segment_markers = detect(text, language);
        let confidence = score(&segment_markers, text.split_whitespace().count());

        total_confidence += confidence;
        scored_count += 1;
        markers.accumulate(&segment_markers);

        if is_low_confidence(confidence) {
            flagged.push(FlaggedSegment {
                text: text.to_string(),
                confidence,
                language,
                issues: segment_markers.issues(),
            });
        }
    }

    // Guard the mean against an all-skipped segment list
    let aggregate = total_confidence / scored_count.max(1) as f64;

    SegmentAnalysis {
        score: aggregate,
        markers,
        flagged,
    }
}

/// Analyze a whole transcript in one declared language
///
/// The aggregate score and markers come from a single pass over the entire
/// transcript. Low-confidence spans come from an independent second pass
/// that re-scores each sentence on its own. The sentence pass never changes
/// the aggregate, so the aggregate is deliberately not the mean of the
/// sentence scores.
pub fn analyze_single(transcript: &str, language: Language) -> SegmentAnalysis {
    let markers = detect(transcript, language);
    let aggregate = score(&markers, transcript.split_whitespace().count());

    let mut flagged = Vec::new();
    for sentence in SENTENCE_SPLIT.split(transcript) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        let sentence_markers = detect(sentence, language);
        let confidence = score(&sentence_markers, sentence.split_whitespace().count());
        if is_low_confidence(confidence) {
            flagged.push(FlaggedSegment {
                text: sentence.to_string(),
                confidence,
                language,
                issues: sentence_markers.issues(),
            });
        }
    }

    SegmentAnalysis {
        score: aggregate,
        markers,
        flagged,
    }
}

/// Pick the language with the most words across the supplied segments
///
/// Ties keep the first language to reach the maximum, in segment order.
/// Segments without a language are ignored; a segment without text still
/// registers its language with zero words. Falls back to `fallback` when
/// nothing registers.
pub fn dominant_language(segments: &[RawSegment], fallback: Language) -> Language {
    let mut word_counts: Vec<(Language, usize)> = Vec::new();

    for segment in segments {
        let Some(code) = &segment.language else {
            continue;
        };
        let language = Language::resolve_or(code, fallback);
        let words = segment
            .text
            .as_deref()
            .map(|t| t.split_whitespace().count())
            .unwrap_or(0);

        match word_counts.iter_mut().find(|(l, _)| *l == language) {
            Some((_, count)) => *count += words,
            None => word_counts.push((language, words)),
        }
    }

    let mut best: Option<(Language, usize)> = None;
    for (language, count) in word_counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((language, count)),
        }
    }

    best.map(|(language, _)| language).unwrap_or(fallback)
}
