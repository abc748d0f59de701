mod backend;
mod config;
mod errors;
mod models;
mod render;
mod viz;
mod workflow;

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::HttpBackend;
use crate::config::Config;
use crate::models::{AnalysisRequest, ResumeFile};
use crate::render::render_view;
use crate::viz::build_view;
use crate::workflow::{WorkflowController, WorkflowState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resumeai_client={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeAI client v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Analyzer endpoints: upload={} analyze={}",
        config.upload_base_url, config.analyze_base_url
    );

    let mut args = std::env::args().skip(1);
    let (resume_path, jd_path) = match (args.next(), args.next()) {
        (Some(r), Some(j)) => (r, j),
        _ => bail!("usage: resumeai-client <resume-file> <job-description-file>"),
    };

    let request = load_request(&resume_path, &jd_path).await?;

    let controller = WorkflowController::new(Arc::new(HttpBackend::new(&config)?));
    match controller.submit(request).await {
        WorkflowState::Success(result) => {
            print!("{}", render_view(&build_view(&result)));
            Ok(())
        }
        WorkflowState::Failed(e) => bail!("{e}"),
        // A single driven submission always settles.
        state => bail!("submission did not settle (state: {state:?})"),
    }
}

/// Reads the two user inputs from disk into an `AnalysisRequest`.
async fn load_request(resume_path: &str, jd_path: &str) -> Result<AnalysisRequest> {
    let bytes = tokio::fs::read(resume_path)
        .await
        .with_context(|| format!("Failed to read resume file '{resume_path}'"))?;
    let name = Path::new(resume_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resume_path.to_string());

    let job_description = tokio::fs::read_to_string(jd_path)
        .await
        .with_context(|| format!("Failed to read job description '{jd_path}'"))?;

    Ok(AnalysisRequest {
        resume_file: ResumeFile::new(name, bytes),
        job_description,
    })
}
