use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang::{Language, TokenStyle};
use crate::models::MarkerCounts;

static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Count confidence markers in one unit of text
///
/// Matching runs over a lowercased copy of the text; the caller keeps the
/// original casing for display. `weak_phrases` has no detector and stays 0.
pub fn detect(text: &str, language: Language) -> MarkerCounts {
    let lowered = text.to_lowercase();
    let patterns = language.patterns();

    let mut markers = MarkerCounts::default();

    for pattern in &patterns.hesitations {
        markers.hesitations += pattern.find_iter(&lowered).count();
    }

    markers.repetitions = count_repetitions(&lowered, patterns.repetition_tokens);

    for filler in &patterns.filler_words {
        markers.filler_words += filler.matcher.find_iter(&lowered).count();
    }

    markers
}

/// Count immediately repeated tokens, non-overlapping
///
/// A counted pair consumes both tokens, so "the the the" is one repetition:
/// the middle token cannot also start a second pair.
fn count_repetitions(lowered: &str, style: TokenStyle) -> usize {
    match style {
        TokenStyle::WordRuns => {
            let tokens: Vec<_> = WORD_RUN.find_iter(lowered).collect();
            let mut count = 0;
            let mut i = 0;
            while i + 1 < tokens.len() {
                let gap = &lowered[tokens[i].end()..tokens[i + 1].start()];
                if tokens[i].as_str() == tokens[i + 1].as_str()
                    && !gap.is_empty()
                    && gap.chars().all(char::is_whitespace)
                {
                    count += 1;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            count
        }
        TokenStyle::WhitespaceTokens => {
            let tokens: Vec<&str> = lowered.split_whitespace().collect();
            let mut count = 0;
            let mut i = 0;
            while i + 1 < tokens.len() {
                if tokens[i] == tokens[i + 1] {
                    count += 1;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_hesitation_sounds() {
        let markers = detect("um um um this is a test", Language::English);
        assert_eq!(markers.hesitations, 3);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(
            detect("UM UM", Language::English),
            detect("um um", Language::English)
        );
    }

    #[test]
    fn test_counts_ellipsis_as_hesitation() {
        let markers = detect("and then... it stopped", Language::English);
        assert_eq!(markers.hesitations, 1);

        let markers = detect("మరియు… ఆగింది", Language::Telugu);
        assert_eq!(markers.hesitations, 1);
    }

    #[test]
    fn test_repetition_pairs_do_not_overlap() {
        let markers = detect("the the the", Language::English);
        assert_eq!(markers.repetitions, 1);

        let markers = detect("the the the the", Language::English);
        assert_eq!(markers.repetitions, 2);
    }

    #[test]
    fn test_repetition_requires_whitespace_gap() {
        // Comma-separated duplicates are not a repetition pair in English
        let markers = detect("well, well", Language::English);
        assert_eq!(markers.repetitions, 0);
    }

    #[test]
    fn test_repetition_on_whitespace_tokens() {
        let markers = detect("मतलब मतलब कुछ और", Language::Hindi);
        assert_eq!(markers.repetitions, 1);
    }

    #[test]
    fn test_partial_word_is_not_a_repetition() {
        let markers = detect("in inside", Language::English);
        assert_eq!(markers.repetitions, 0);
    }

    #[test]
    fn test_counts_filler_words() {
        // "you know" and "like" from the English filler list
        let markers = detect("You know, it was like a dream", Language::English);
        assert_eq!(markers.filler_words, 2);
    }

    #[test]
    fn test_multi_word_filler_counts_once() {
        let markers = detect("మీకు తెలుసా ఇది", Language::Telugu);
        // "మీకు తెలుసా" as a phrase plus the bare "తెలుసా" inside it
        assert!(markers.filler_words >= 1);
    }

    #[test]
    fn test_weak_phrases_always_zero() {
        let markers = detect("um the the like totally", Language::English);
        assert_eq!(markers.weak_phrases, 0);
    }
}
