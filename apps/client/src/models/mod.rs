pub mod analysis;

pub use analysis::{AnalysisRequest, AnalysisResult, ExtractedText, ResumeFile};
