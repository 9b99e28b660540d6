use thiserror::Error;

/// Errors produced by the analysis core
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The transcript was missing or blank after trimming
    #[error("transcript is empty")]
    EmptyTranscript,

    /// A language code did not match any supported language.
    ///
    /// Never reaches callers of `analyze` - unknown codes are resolved
    /// to a default before analysis starts.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}
