use serde::Deserialize;

/// An analysis request as supplied by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// The transcript text; must be non-empty after trimming
    pub transcript: String,
    /// Declared language code, e.g. "en" or "te"; unknown codes fall back
    /// to English
    #[serde(default = "default_language_code")]
    pub language: String,
    /// Optional externally segmented spans; when non-empty the request is
    /// analyzed per segment instead of as a whole
    #[serde(default, rename = "languageSegments")]
    pub language_segments: Vec<RawSegment>,
}

impl AnalysisRequest {
    /// Build a single-language request
    pub fn new(transcript: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            language: language.into(),
            language_segments: Vec::new(),
        }
    }
}

fn default_language_code() -> String {
    "en".to_string()
}

/// One externally supplied language span
///
/// Fields are optional so a malformed segment deserializes cleanly and can
/// be skipped instead of failing the whole request.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawSegment {
    /// Build a well-formed segment
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            text: Some(text.into()),
        }
    }
}
