use once_cell::sync::Lazy;
use regex::Regex;

use super::Language;

/// How repeated-word detection tokenizes a language's text.
///
/// The two styles mirror the original matching rules: English repetition
/// only pairs runs of word characters separated by pure whitespace, while
/// Telugu and Hindi pair whole whitespace-delimited tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    /// Tokens are `\w+` runs; the gap between a pair must be whitespace only
    WordRuns,
    /// Tokens are whitespace-delimited chunks
    WhitespaceTokens,
}

/// A filler word with its compiled whole-word matcher
#[derive(Debug)]
pub struct FillerWord {
    /// The filler as listed, used when reporting which fillers were found
    pub word: &'static str,
    /// Whole-word matcher over lowercased text, metacharacters escaped
    pub matcher: Regex,
}

/// Immutable per-language pattern data, compiled once at first use
#[derive(Debug)]
pub struct PatternSet {
    /// Filler words in priority order (reporting uses the first matches)
    pub filler_words: Vec<FillerWord>,
    /// Hesitation patterns; counts are summed across all of them
    pub hesitations: Vec<Regex>,
    /// Tokenization rule for repeated-word detection
    pub repetition_tokens: TokenStyle,
}

impl PatternSet {
    fn compile(fillers: &[&'static str], hesitations: &[&str], repetition_tokens: TokenStyle) -> Self {
        let filler_words = fillers
            .iter()
            .map(|&word| FillerWord {
                word,
                matcher: Regex::new(&format!(r"\b{}\b", regex::escape(&word.to_lowercase())))
                    .unwrap(),
            })
            .collect();

        let hesitations = hesitations
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();

        Self {
            filler_words,
            hesitations,
            repetition_tokens,
        }
    }
}

static ENGLISH: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(
        &[
            "uh", "um", "like", "you know", "I mean", "actually", "basically",
            "so", "well", "literally", "right", "kinda", "maybe", "just",
            "hmm", "let me see", "in fact", "to be honest", "sort of",
            "kind of", "I guess", "you see", "I suppose", "perhaps",
            "honestly", "to be frank", "not only that", "eventually",
        ],
        &[r"\b(i+|u+h+|u+m+)\b", r"\.\.\.|…"],
        TokenStyle::WordRuns,
    )
});

static TELUGU: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(
        &[
            "అంటే", "మరి", "అదే", "చూడండి", "వినండి", "తెలుసా",
            "అలాగే", "సరే", "అవును", "కదా", "మీకు తెలుసా",
            "ఇలా", "అలా", "అబ్బా", "మరి చూడండి", "అయితే",
            "చెప్పాలంటే", "ఎందుకంటే", "అసలు", "నిజానికి", "ఏమో",
            "సరేగా", "మరేమో", "అవునుగా", "కానీ", "పోనీ",
            "ఇక్కడ", "అక్కడ", "ఎప్పుడైతే", "ఎలాగైతే",
        ],
        &[r"\.\.\.", r"…"],
        TokenStyle::WhitespaceTokens,
    )
});

static HINDI: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(
        &[
            "मतलब", "देखिए", "सुनिए", "तो", "ऐसे", "वैसे", "हाँ",
            "अच्छा", "ठीक है", "पता है", "समझे", "जैसे", "मैं कहूँ",
            "क्या है", "बात ये है", "यानी", "मैं कहूंगा", "देखो",
            "सुनो", "एक मिनट", "बताऊं", "मेरा मतलब", "असल में",
            "कैसे कहूं", "कुछ ऐसा", "लेकिन", "फिर भी", "और हाँ",
            "चलो", "अरे", "आप देखिये", "समझ लीजिए",
        ],
        &[r"\.\.\.", r"…"],
        TokenStyle::WhitespaceTokens,
    )
});

/// Look up the compiled pattern set for a language
pub fn patterns_for(language: Language) -> &'static PatternSet {
    match language {
        Language::English => &ENGLISH,
        Language::Telugu => &TELUGU,
        Language::Hindi => &HINDI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pattern_sets_compile() {
        for language in Language::ALL {
            let patterns = patterns_for(language);
            assert!(!patterns.filler_words.is_empty());
            assert!(!patterns.hesitations.is_empty());
        }
    }

    #[test]
    fn test_filler_metacharacters_are_literal() {
        // "sort of" contains a space but no active metacharacters; make sure
        // escaping keeps multi-word fillers matching as plain text
        let patterns = patterns_for(Language::English);
        let sort_of = patterns
            .filler_words
            .iter()
            .find(|f| f.word == "sort of")
            .unwrap();
        assert!(sort_of.matcher.is_match("it was sort of fine"));
        assert!(!sort_of.matcher.is_match("some sort offered"));
    }

    #[test]
    fn test_filler_whole_word_only() {
        let patterns = patterns_for(Language::English);
        let so = patterns.filler_words.iter().find(|f| f.word == "so").unwrap();
        assert!(so.matcher.is_match("so it goes"));
        assert!(!so.matcher.is_match("sorted and solid"));
    }
}
