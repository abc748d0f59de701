#![allow(dead_code)]

//! Workflow controller — owns the submission state machine.
//!
//! One submission drives the two-phase pipeline: upload the resume file,
//! then analyze the extracted text against the job description. The phases
//! are strictly sequential; the analyze phase is never invoked unless the
//! upload phase settled successfully. The controller is the only writer of
//! `WorkflowState`; the rendering layer reads cloned snapshots.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::backend::AnalysisBackend;
use crate::errors::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResult};

/// Lifecycle of one submission, as seen by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// No submission yet, or the form was cleared.
    Idle,
    /// A submission is in flight; further `submit` calls are no-ops.
    Submitting,
    Success(AnalysisResult),
    /// Terminal for this attempt. Distinguishable from `Idle` so the UI can
    /// offer a retry affordance instead of reverting to the empty state.
    Failed(AnalysisError),
}

impl WorkflowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }
}

struct Inner {
    state: WorkflowState,
    /// Monotonically increasing submission sequence. A completion only
    /// writes state if its sequence is still current, so a `reset` while a
    /// submission is in flight discards the late result.
    seq: u64,
}

/// Drives the upload → analyze pipeline and owns the single mutable
/// `WorkflowState`. At most one submission is in flight at a time.
pub struct WorkflowController {
    backend: Arc<dyn AnalysisBackend>,
    inner: Mutex<Inner>,
}

impl WorkflowController {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            inner: Mutex::new(Inner {
                state: WorkflowState::Idle,
                seq: 0,
            }),
        }
    }

    /// Immutable snapshot of the current state.
    pub fn state(&self) -> WorkflowState {
        self.lock().state.clone()
    }

    /// Clears the form: back to `Idle`, and any in-flight submission becomes
    /// stale (its completion will be discarded).
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.seq += 1;
        inner.state = WorkflowState::Idle;
    }

    /// Runs the full pipeline and returns the settled state.
    ///
    /// Re-entrant calls while `Submitting` are rejected as no-ops (current
    /// snapshot is returned, the backend is never touched). Validation
    /// failures settle `Failed(Validation)` with zero network calls.
    pub async fn submit(&self, request: AnalysisRequest) -> WorkflowState {
        let seq = {
            let mut inner = self.lock();
            if inner.state.is_submitting() {
                warn!("Submit rejected: a submission is already in flight");
                return inner.state.clone();
            }
            if let Err(e) = request.validate() {
                warn!("Submit rejected before any network call: {e}");
                inner.state = WorkflowState::Failed(e);
                return inner.state.clone();
            }
            inner.seq += 1;
            inner.state = WorkflowState::Submitting;
            inner.seq
        };

        info!(
            "Submitting resume '{}' ({} bytes) for analysis",
            request.resume_file.name,
            request.resume_file.size()
        );

        // Phase 1: upload. A failure here short-circuits the pipeline —
        // there is no partial-success state.
        let extracted = match self.backend.parse_resume(&request.resume_file).await {
            Ok(text) => text,
            Err(e) => {
                error!("Phase '{}' failed: {e}", e.phase());
                return self.settle(seq, WorkflowState::Failed(e));
            }
        };
        debug!(
            "Upload phase complete ({} preview chars)",
            extracted.text_preview.len()
        );

        // Phase 2: analyze the extracted text against the job description.
        match self
            .backend
            .final_match(&extracted.text_preview, &request.job_description)
            .await
        {
            Ok(result) => {
                info!(
                    "Analysis complete: final score {}",
                    result.final_match_percentage
                );
                self.settle(seq, WorkflowState::Success(result))
            }
            Err(e) => {
                error!("Phase '{}' failed: {e}", e.phase());
                self.settle(seq, WorkflowState::Failed(e))
            }
        }
    }

    fn settle(&self, seq: u64, next: WorkflowState) -> WorkflowState {
        let mut inner = self.lock();
        if inner.seq == seq {
            inner.state = next;
        } else {
            debug!("Discarding completion of stale submission #{seq}");
        }
        inner.state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Critical sections are assign/clone only and never span an await.
        self.inner.lock().expect("workflow state lock poisoned")
    }
}
