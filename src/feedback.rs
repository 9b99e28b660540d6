use crate::lang::Language;
use crate::models::MarkerCounts;

/// Composed feedback for one analyzed request
#[derive(Debug, Clone)]
pub struct Feedback {
    /// Band feedback string for the aggregate confidence
    pub feedback: String,
    /// Improvement suggestions, appended in a fixed rule order
    pub recommendations: Vec<String>,
}

/// Fraction of the word count above which fillers trigger a suggestion
const FILLER_RATE_THRESHOLD: f64 = 0.1;
/// Fraction of the word count above which hesitations or repetitions do
const MARKER_RATE_THRESHOLD: f64 = 0.05;

/// Map an aggregate score and marker counts to localized feedback
///
/// `confidence_pct` is the already-rounded percentage; band cutoffs compare
/// against the rounded value. Thresholds are taken against the whitespace
/// word count of the full original transcript regardless of how the score
/// was aggregated.
pub fn compose(
    confidence_pct: f64,
    markers: &MarkerCounts,
    transcript: &str,
    language: Language,
) -> Feedback {
    let templates = language.templates();

    let band = if confidence_pct >= 80.0 {
        templates.confidence_high
    } else if confidence_pct >= 60.0 {
        templates.confidence_medium
    } else {
        templates.confidence_low
    };

    let word_count = transcript.split_whitespace().count() as f64;
    let mut recommendations = Vec::new();

    if markers.filler_words as f64 > word_count * FILLER_RATE_THRESHOLD {
        let lowered = transcript.to_lowercase();
        let used: Vec<&str> = language
            .patterns()
            .filler_words
            .iter()
            .filter(|filler| filler.matcher.is_match(&lowered))
            .map(|filler| filler.word)
            .take(3)
            .collect();
        if !used.is_empty() {
            recommendations
                .push(templates.filler_words_feedback.replacen("{}", &used.join(", "), 1));
        }
    }

    if markers.hesitations as f64 > word_count * MARKER_RATE_THRESHOLD {
        recommendations.push(templates.hesitation_feedback.to_string());
    }

    if markers.repetitions as f64 > word_count * MARKER_RATE_THRESHOLD {
        recommendations.push(templates.repetition_feedback.to_string());
    }

    Feedback {
        feedback: band.to_string(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_markers() -> MarkerCounts {
        MarkerCounts::default()
    }

    #[test]
    fn test_band_cutoffs_are_inclusive() {
        let transcript = "a clean statement";
        let high = compose(80.0, &no_markers(), transcript, Language::English);
        assert_eq!(high.feedback, "Excellent speech! Very confident delivery.");

        let medium = compose(79.99, &no_markers(), transcript, Language::English);
        assert_eq!(medium.feedback, "Good speech with room for improvement.");

        let medium = compose(60.0, &no_markers(), transcript, Language::English);
        assert_eq!(medium.feedback, "Good speech with room for improvement.");

        let low = compose(59.99, &no_markers(), transcript, Language::English);
        assert_eq!(low.feedback, "Your speech needs more practice for confidence.");
    }

    #[test]
    fn test_filler_recommendation_lists_first_three_in_list_order() {
        let transcript = "um, like, you know, actually, basically stuff";
        let markers = MarkerCounts {
            filler_words: 5,
            ..Default::default()
        };
        let feedback = compose(40.0, &markers, transcript, Language::English);
        assert_eq!(
            feedback.recommendations,
            vec!["Try to reduce filler words like: um, like, you know"]
        );
    }

    #[test]
    fn test_filler_recommendation_needs_matches_in_transcript() {
        // Counts above threshold, but none of the fillers appear in the
        // transcript itself (multi-language aggregation can do this)
        let markers = MarkerCounts {
            filler_words: 5,
            ..Default::default()
        };
        let feedback = compose(40.0, &markers, "मतलब कुछ और", Language::English);
        assert!(feedback.recommendations.is_empty());
    }

    #[test]
    fn test_hesitation_and_repetition_recommendations_in_order() {
        let transcript = "one two three four five six seven eight nine ten";
        let markers = MarkerCounts {
            hesitations: 1,
            repetitions: 1,
            ..Default::default()
        };
        let feedback = compose(90.0, &markers, transcript, Language::English);
        assert_eq!(
            feedback.recommendations,
            vec![
                "Work on reducing hesitations in your speech",
                "Avoid repeating words frequently"
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // 1 hesitation over 20 words is exactly the 0.05 rate, not above it
        let transcript = "w w w w w w w w w w w w w w w w w w w w";
        let markers = MarkerCounts {
            hesitations: 1,
            ..Default::default()
        };
        let feedback = compose(90.0, &markers, transcript, Language::English);
        assert!(feedback.recommendations.is_empty());
    }

    #[test]
    fn test_feedback_is_localized() {
        let feedback = compose(50.0, &no_markers(), "कुछ", Language::Hindi);
        assert_eq!(
            feedback.feedback,
            "आत्मविश्वास बढ़ाने के लिए और अभ्यास की आवश्यकता है।"
        );
    }
}
