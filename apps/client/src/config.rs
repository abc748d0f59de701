use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The two endpoint base addresses are independently configurable so the same
/// client can target different analyzer deployments. Both default to the
/// standard local deployment address.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the resume-parsing endpoint (`/parse-resume`).
    pub upload_base_url: String,
    /// Base URL for the match endpoint (`/final-match`).
    pub analyze_base_url: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            upload_base_url: env_or("UPLOAD_BASE_URL", DEFAULT_BASE_URL),
            analyze_base_url: env_or("ANALYZE_BASE_URL", DEFAULT_BASE_URL),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a valid number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
