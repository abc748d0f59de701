//! Backend client — the single point of entry for all analyzer API calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the analyzer directly.
//! The workflow controller depends on the `AnalysisBackend` trait, so tests
//! can swap in a stub without touching the state machine.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::AnalysisError;
use crate::models::{AnalysisResult, ExtractedText, ResumeFile};

const PARSE_RESUME_PATH: &str = "/parse-resume";
const FINAL_MATCH_PATH: &str = "/final-match";

/// The two analyzer round-trips, strictly in pipeline order: the analyze
/// phase consumes the upload phase's `text_preview`.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Phase 1: submit the resume file, get its extracted text back.
    async fn parse_resume(&self, file: &ResumeFile) -> Result<ExtractedText, AnalysisError>;

    /// Phase 2: submit resume text + job text, get the structured result.
    async fn final_match(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Serialize)]
struct FinalMatchRequest<'a> {
    resume_text: &'a str,
    job_text: &'a str,
}

/// Error body the analyzer returns on non-2xx: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    detail: String,
}

/// Extracts the backend `detail` message from an error body, falling back to
/// the supplied generic message when the body is empty or not the expected
/// shape.
fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<BackendErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                fallback.to_string()
            } else {
                body.trim().to_string()
            }
        })
}

/// HTTP implementation of `AnalysisBackend` against the analyzer service.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    upload_base_url: String,
    analyze_base_url: String,
}

impl HttpBackend {
    /// Startup-time construction. Failures here are initialization errors,
    /// not pipeline-phase failures, so they surface through `anyhow` like
    /// `Config::from_env` does.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            upload_base_url: config.upload_base_url.clone(),
            analyze_base_url: config.analyze_base_url.clone(),
        })
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn parse_resume(&self, file: &ResumeFile) -> Result<ExtractedText, AnalysisError> {
        let url = format!("{}{}", self.upload_base_url, PARSE_RESUME_PATH);
        let part = Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
        let form = Form::new().part("file", part);

        debug!(
            "Uploading resume '{}' ({} bytes) to {url}",
            file.name,
            file.size()
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::UploadFailed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::UploadFailed(error_detail(
                &body,
                &format!("backend returned {status}"),
            )));
        }

        response
            .json::<ExtractedText>()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(format!("parse-resume body: {e}")))
    }

    async fn final_match(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let url = format!("{}{}", self.analyze_base_url, FINAL_MATCH_PATH);
        let request_body = FinalMatchRequest {
            resume_text,
            job_text,
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalysisError::AnalysisFailed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::AnalysisFailed(error_detail(
                &body,
                "Backend error",
            )));
        }

        let result = response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(format!("final-match body: {e}")))?;

        debug!(
            "Analysis complete: skill={} semantic={} final={}",
            result.skill_match_percentage,
            result.semantic_match_percentage,
            result.final_match_percentage
        );

        Ok(result)
    }
}
