//! Trait abstraction for the submission backend to enable mocking in tests

use super::payload::{Ack, FormPayload, ProgressReporter};
use async_trait::async_trait;
use thiserror::Error;

/// Why a backend did not accept a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
    #[error("Could not reach the server: {0}")]
    Transport(String),
    #[error("Upload was interrupted")]
    Interrupted,
}

/// Where validated forms are sent
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Deliver a payload. Long transfers report through `progress`.
    async fn submit_form(
        &self,
        payload: FormPayload,
        progress: ProgressReporter,
    ) -> Result<Ack, SubmitError>;
}
