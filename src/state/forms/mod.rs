//! Form domain layer
//!
//! Field values, declarative validation and the submission state machine
//! shared by the contact, registration and video upload pages.

mod field;
mod rules;
mod schema;
mod session;
mod upload;

pub use field::{FieldKind, FieldValue, FormField};
pub use schema::{FormKind, FormSchema, CONTACT_RESET_DELAY, FILE_FIELD};
pub use session::{Form, FormSession, SubmissionPhase, SubmitOutcome};
pub use upload::{format_file_size, SelectedFile, MAX_UPLOAD_BYTES};

#[cfg(test)]
pub use schema::SUBJECTS;
