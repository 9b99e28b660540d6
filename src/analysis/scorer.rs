use crate::models::MarkerCounts;

/// Marker weights for the density formula
const HESITATION_WEIGHT: f64 = 0.30;
const REPETITION_WEIGHT: f64 = 0.25;
const FILLER_WEIGHT: f64 = 0.25;
const WEAK_PHRASE_WEIGHT: f64 = 0.20;

/// Segments scoring strictly below this are flagged as low-confidence
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Convert marker counts and a word count into a confidence score in [0, 1]
///
/// Marker density is the weighted marker sum per 10 words; the score is its
/// complement, clamped. A zero-word unit scores 1.0 on purpose: with nothing
/// said there is nothing to penalize, so an empty unit is vacuously
/// confident.
pub fn score(markers: &MarkerCounts, word_count: usize) -> f64 {
    if word_count == 0 {
        return 1.0;
    }

    let weighted = markers.hesitations as f64 * HESITATION_WEIGHT
        + markers.repetitions as f64 * REPETITION_WEIGHT
        + markers.filler_words as f64 * FILLER_WEIGHT
        + markers.weak_phrases as f64 * WEAK_PHRASE_WEIGHT;

    let density = weighted / (word_count as f64 / 10.0);

    (1.0 - density.min(1.0)).max(0.0)
}

/// Whether a score falls below the flagging threshold (strictly)
pub fn is_low_confidence(score: f64) -> bool {
    score < LOW_CONFIDENCE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::detect;
    use crate::lang::Language;

    fn markers(hesitations: usize, repetitions: usize, filler_words: usize) -> MarkerCounts {
        MarkerCounts {
            hesitations,
            repetitions,
            filler_words,
            weak_phrases: 0,
        }
    }

    #[test]
    fn test_score_stays_in_unit_range() {
        let texts = [
            "um um um uh uh the the like basically you know...",
            "a perfectly fluent sentence with no markers at all",
            "um",
            "",
        ];
        for text in texts {
            for language in Language::ALL {
                let s = score(&detect(text, language), text.split_whitespace().count());
                assert!((0.0..=1.0).contains(&s), "{s} out of range for {text:?}");
            }
        }
    }

    #[test]
    fn test_zero_words_scores_full_confidence() {
        assert_eq!(score(&markers(5, 5, 5), 0), 1.0);
        assert_eq!(score(&MarkerCounts::default(), 0), 1.0);
    }

    #[test]
    fn test_clean_text_scores_full_confidence() {
        assert_eq!(score(&MarkerCounts::default(), 12), 1.0);
    }

    #[test]
    fn test_heavy_markers_floor_at_zero() {
        // 3 hesitations over 7 words: density 0.9 / 0.7 > 1, clamped
        assert_eq!(score(&markers(3, 0, 0), 7), 0.0);
    }

    #[test]
    fn test_weighted_density() {
        // 1 filler over 10 words: density 0.25 / 1.0
        let s = score(&markers(0, 0, 1), 10);
        assert!((s - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_exact_threshold_is_not_low_confidence() {
        assert!(!is_low_confidence(LOW_CONFIDENCE_THRESHOLD));
        assert!(is_low_confidence(LOW_CONFIDENCE_THRESHOLD - 1e-9));
        assert!(!is_low_confidence(0.95));
        assert!(is_low_confidence(0.0));
    }
}
