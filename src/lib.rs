pub mod analysis;
pub mod error;
pub mod feedback;
pub mod io;
pub mod lang;
pub mod models;

pub use analysis::{analyze, detect, is_low_confidence, score, LOW_CONFIDENCE_THRESHOLD};
pub use error::AnalysisError;
pub use feedback::{compose, Feedback};
pub use io::{parse_request_json, read_request_file, render_summary};
pub use lang::{FeedbackTemplates, Language, PatternSet, ReportLabels};
pub use models::{AnalysisReport, AnalysisRequest, FlaggedSegment, MarkerCounts, RawSegment};
