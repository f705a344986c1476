//! Submission backend module
//!
//! Forms talk to the outside world only through [`SubmissionBackend`].
//! The shipped implementation is simulated; a real transport can replace
//! it without touching validation or session state.

mod payload;
mod simulated;
mod traits;

pub use payload::{Ack, FormPayload, ProgressReporter, TransferEvent};
pub use simulated::{SimulatedBackend, DEFAULT_MAX_INCREMENT, DEFAULT_TICK};
pub use traits::{SubmissionBackend, SubmitError};

#[cfg(test)]
pub use traits::MockSubmissionBackend;
