use thiserror::Error;

/// Client-side error taxonomy for one submission attempt.
///
/// All variants carry display-ready strings so a settled `Failed` state can be
/// cloned out to the rendering layer as an immutable snapshot. Transport-level
/// detail (reqwest errors, status codes) is flattened into the message at the
/// phase boundary where it occurs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Caught before any network call: missing file or blank job text.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Phase 1 failed — transport error or non-2xx from `/parse-resume`.
    #[error("Resume upload failed: {0}")]
    UploadFailed(String),

    /// Phase 2 failed — transport error or non-2xx from `/final-match`.
    /// Carries the backend `detail` message verbatim when one was supplied.
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    /// A 2xx response whose body does not decode into the expected schema.
    /// Raised at the boundary so undefined values never reach the viz layer.
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Which pipeline stage produced this error. Used for log context.
    pub fn phase(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation",
            AnalysisError::UploadFailed(_) => "upload",
            AnalysisError::AnalysisFailed(_) | AnalysisError::MalformedResponse(_) => "analyze",
        }
    }
}
