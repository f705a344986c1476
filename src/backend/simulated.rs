//! In-process backend standing in for the tutoring site's server
//!
//! Submissions are logged instead of sent. Payloads that carry a file are
//! held back by a paced progress animation before they are acknowledged.

use super::payload::{Ack, FormPayload, ProgressReporter};
use super::traits::{SubmissionBackend, SubmitError};
use crate::config::SiteConfig;
use crate::state::FormKind;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Default interval between upload progress ticks
pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

/// Default upper bound (exclusive) for a single progress step, in percent
pub const DEFAULT_MAX_INCREMENT: f64 = 15.0;

pub struct SimulatedBackend {
    tick: Duration,
    max_increment: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedBackend {
    pub fn new(tick: Duration, max_increment: f64) -> Self {
        Self {
            tick,
            max_increment: max_increment.max(1.0),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.upload_tick(), config.upload_max_increment())
    }

    /// Use a fixed seed so progress sequences repeat
    #[cfg(test)]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    fn next_increment(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0.0..self.max_increment)
    }

    /// Tick until the accumulated percentage reaches 100
    async fn pace_upload(&self, progress: &ProgressReporter) {
        let mut interval = tokio::time::interval(self.tick);
        // The first tick of an interval completes immediately
        interval.tick().await;

        let mut percent = 0.0;
        loop {
            interval.tick().await;
            percent += self.next_increment();
            if percent >= 100.0 {
                progress.report(100.0);
                return;
            }
            tracing::trace!(percent, "Simulated upload progress");
            progress.report(percent);
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_TICK, DEFAULT_MAX_INCREMENT)
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit_form(
        &self,
        payload: FormPayload,
        progress: ProgressReporter,
    ) -> Result<Ack, SubmitError> {
        let body =
            serde_json::to_string(&payload).map_err(|e| SubmitError::Transport(e.to_string()))?;
        tracing::info!(form = %payload.form, %body, "Form submitted");

        if payload.form == FormKind::VideoUpload && payload.file.is_none() {
            return Err(SubmitError::Rejected("no video file attached".to_string()));
        }

        if let Some(file) = &payload.file {
            tracing::info!(
                file = %file.name,
                size = file.size,
                tracked = progress.is_enabled(),
                "Starting simulated upload"
            );
            self.pace_upload(&progress).await;
        }

        let ack = Ack::new();
        tracing::debug!(reference = %ack.reference, "Submission acknowledged");
        Ok(ack)
    }
}
