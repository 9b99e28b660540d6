use serde::{Deserialize, Serialize};

/// Confidence-marker counts for one unit of text
///
/// A fixed-field struct rather than a map so every downstream consumer is
/// guaranteed all four keys are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCounts {
    /// Disfluency sounds and trailing-off pauses
    pub hesitations: usize,
    /// Immediately repeated words
    pub repetitions: usize,
    /// Habitual filler words and phrases
    pub filler_words: usize,
    /// Reserved; no detector is defined yet and this stays 0
    pub weak_phrases: usize,
}

impl MarkerCounts {
    /// Add another unit's counts into this one
    pub fn accumulate(&mut self, other: &MarkerCounts) {
        self.hesitations += other.hesitations;
        self.repetitions += other.repetitions;
        self.filler_words += other.filler_words;
        self.weak_phrases += other.weak_phrases;
    }

    /// Names of the markers with a non-zero count, in field order
    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if self.hesitations > 0 {
            issues.push("hesitations");
        }
        if self.repetitions > 0 {
            issues.push("repetitions");
        }
        if self.filler_words > 0 {
            issues.push("filler_words");
        }
        if self.weak_phrases > 0 {
            issues.push("weak_phrases");
        }
        issues
    }
}
