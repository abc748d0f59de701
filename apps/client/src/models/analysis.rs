#![allow(dead_code)]

//! Data model for the two-phase analysis pipeline.
//!
//! Wire field names are snake_case and map 1:1 onto the struct fields, so
//! every field the backend sends has a destination — nothing is silently
//! dropped, and a missing required field fails deserialization at the
//! boundary instead of propagating undefined values downstream.

use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AnalysisError;

/// The resume file selected by the user. Content is opaque to the client:
/// only the name and byte length are ever displayed or logged.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub name: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Byte size, shown alongside the filename in the upload display.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The two user inputs for one submission.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_file: ResumeFile,
    pub job_description: String,
}

impl AnalysisRequest {
    /// Local precondition check, run before any network call.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.resume_file.name.is_empty() || self.resume_file.bytes.is_empty() {
            return Err(AnalysisError::Validation(
                "Please upload a resume file".to_string(),
            ));
        }
        if self.job_description.trim().is_empty() {
            return Err(AnalysisError::Validation(
                "Please paste a job description".to_string(),
            ));
        }
        Ok(())
    }
}

/// Response of `POST /parse-resume`. Consumed immediately by the analyze
/// phase and never persisted. Only `text_preview` is required; the other
/// fields are informational extras the backend includes.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedText {
    pub text_preview: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub text_length: Option<u64>,
}

/// Response of `POST /final-match` — the result payload driving all
/// post-analysis rendering. Percentages are integers in [0,100]; skill and
/// advice sequences keep backend order. The client trusts the payload as-is
/// (it does not re-verify that `common_skills` is an intersection).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub skill_match_percentage: u32,
    pub semantic_match_percentage: u32,
    pub final_match_percentage: u32,
    pub resume_skills: Vec<String>,
    /// Skills extracted from the job description. Present on the wire but
    /// not surfaced by any score card or section; mapped for completeness.
    #[serde(default)]
    pub job_skills: Vec<String>,
    pub common_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ats_recommendations: Vec<String>,
    pub rewrite_suggestions: Vec<String>,
    /// Free-form label from the backend — no fixed vocabulary. The current
    /// backend emits "Strong" / "Medium" / "Weak", but tiering must not
    /// assume that set.
    #[serde(default)]
    pub confidence: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AnalysisRequest {
        AnalysisRequest {
            resume_file: ResumeFile::new("resume.pdf", &b"%PDF-1.4 ..."[..]),
            job_description: "Senior Rust Engineer, 5+ years experience".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_file() {
        let mut request = valid_request();
        request.resume_file = ResumeFile::new("resume.pdf", Bytes::new());
        assert!(matches!(
            request.validate(),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_whitespace_job_description() {
        let mut request = valid_request();
        request.job_description = "   \n\t ".to_string();
        assert!(matches!(
            request.validate(),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn test_extracted_text_requires_only_preview() {
        let minimal: ExtractedText = serde_json::from_str(r#"{"text_preview": "John Doe"}"#)
            .expect("text_preview alone must deserialize");
        assert_eq!(minimal.text_preview, "John Doe");
        assert!(minimal.filename.is_none());

        let full: ExtractedText = serde_json::from_str(
            r#"{"filename": "cv.pdf", "text_length": 4096, "text_preview": "John Doe"}"#,
        )
        .unwrap();
        assert_eq!(full.filename.as_deref(), Some("cv.pdf"));
        assert_eq!(full.text_length, Some(4096));
    }

    #[test]
    fn test_analysis_result_maps_full_wire_payload() {
        let json = r#"{
            "resume_skills": ["rust", "sql"],
            "job_skills": ["rust", "kubernetes"],
            "skill_match_percentage": 50,
            "semantic_match_percentage": 72,
            "final_match_percentage": 59,
            "common_skills": ["rust"],
            "missing_skills": ["kubernetes"],
            "ats_recommendations": ["Add kubernetes to your skills section"],
            "confidence": "Medium",
            "rewrite_suggestions": ["Quantify your impact"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.final_match_percentage, 59);
        assert_eq!(result.resume_skills, vec!["rust", "sql"]);
        assert_eq!(result.job_skills, vec!["rust", "kubernetes"]);
        assert_eq!(result.missing_skills, vec!["kubernetes"]);
        assert_eq!(result.confidence.as_deref(), Some("Medium"));
    }

    #[test]
    fn test_analysis_result_rejects_missing_required_field() {
        // No final_match_percentage — must fail at the boundary.
        let json = r#"{
            "resume_skills": [],
            "skill_match_percentage": 10,
            "semantic_match_percentage": 20,
            "common_skills": [],
            "missing_skills": [],
            "ats_recommendations": [],
            "rewrite_suggestions": []
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_analysis_result_tolerates_absent_confidence() {
        let json = r#"{
            "skill_match_percentage": 0,
            "semantic_match_percentage": 0,
            "final_match_percentage": 0,
            "resume_skills": [],
            "common_skills": [],
            "missing_skills": [],
            "ats_recommendations": [],
            "rewrite_suggestions": []
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.confidence.is_none());
        assert!(result.job_skills.is_empty());
    }
}
