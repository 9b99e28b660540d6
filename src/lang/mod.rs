pub mod patterns;
pub mod templates;

pub use patterns::{FillerWord, PatternSet, TokenStyle};
pub use templates::{FeedbackTemplates, ReportLabels};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// The closed set of supported languages
///
/// External language codes are stringly-typed and open-ended; everything
/// inside the analyzer works on this enum so pattern and template lookups
/// are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Telugu,
    Hindi,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 3] = [Language::English, Language::Telugu, Language::Hindi];

    /// Strictly parse a language code
    ///
    /// Accepts two-letter tags with an optional region suffix ("en",
    /// "en-US") and full names ("english"), case-insensitively.
    pub fn from_code(code: &str) -> Result<Language, AnalysisError> {
        let base = code.split('-').next().unwrap_or(code).to_lowercase();
        match base.as_str() {
            "en" | "english" => Ok(Language::English),
            "te" | "telugu" => Ok(Language::Telugu),
            "hi" | "hindi" => Ok(Language::Hindi),
            _ => Err(AnalysisError::UnknownLanguage(code.to_string())),
        }
    }

    /// Resolve a code, falling back to English for unknown input
    pub fn resolve(code: &str) -> Language {
        Self::resolve_or(code, Language::English)
    }

    /// Resolve a code, falling back to the given language for unknown input
    ///
    /// Segment languages fall back to the request's declared language
    /// rather than the global default.
    pub fn resolve_or(code: &str, fallback: Language) -> Language {
        Self::from_code(code).unwrap_or(fallback)
    }

    /// The compiled pattern set for this language
    pub fn patterns(&self) -> &'static PatternSet {
        patterns::patterns_for(*self)
    }

    /// The feedback templates for this language
    pub fn templates(&self) -> &'static FeedbackTemplates {
        templates::templates_for(*self)
    }

    /// The presentation labels for this language
    pub fn labels(&self) -> &'static ReportLabels {
        templates::labels_for(*self)
    }

    /// Lowercase name used in wire formats and logs
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Telugu => "telugu",
            Language::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_two_letter_codes() {
        assert_eq!(Language::resolve("en"), Language::English);
        assert_eq!(Language::resolve("te"), Language::Telugu);
        assert_eq!(Language::resolve("hi"), Language::Hindi);
    }

    #[test]
    fn test_resolve_strips_region_suffix() {
        assert_eq!(Language::resolve("en-US"), Language::English);
        assert_eq!(Language::resolve("hi-IN"), Language::Hindi);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Language::resolve("EN"), Language::English);
        assert_eq!(Language::resolve("Te"), Language::Telugu);
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        assert_eq!(Language::resolve("fr"), Language::English);
        assert_eq!(Language::resolve(""), Language::English);
        assert_eq!(Language::resolve_or("fr", Language::Hindi), Language::Hindi);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!(matches!(
            Language::from_code("zz"),
            Err(AnalysisError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&Language::Telugu).unwrap(),
            "\"telugu\""
        );
    }
}
