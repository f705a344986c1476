//! Form session state machine
//!
//! A [`FormSession`] owns one form's values, its error map, the picked file
//! (upload form only) and the submission phase. Each page holds its own
//! session; nothing is shared between them.

use super::field::{FieldKind, FormField};
use super::rules::{self, ErrorMap};
use super::schema::{FormKind, FormSchema, FILE_FIELD};
use super::upload::{FileRejection, SelectedFile};
use crate::backend::{
    Ack, FormPayload, ProgressReporter, SubmissionBackend, SubmitError, TransferEvent,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Trait for focus movement across a form's fields
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_active_field(&self) -> Option<&FormField> {
        self.get_field(self.active_field())
    }
}

/// Lifecycle stage of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Upload in flight; progress is moving
    Submitting,
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the session
    Invalid,
    /// Backend accepted the form
    Submitted,
    /// Background transfer started
    Started,
    /// Backend refused or could not be reached
    Failed,
    /// Not editing, nothing happened
    Ignored,
}

/// A backend call running on its own task
#[derive(Debug)]
struct Transfer {
    handle: JoinHandle<()>,
    events: UnboundedReceiver<TransferEvent>,
}

impl Drop for Transfer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Debug)]
pub struct FormSession {
    schema: FormSchema,
    fields: Vec<FormField>,
    errors: ErrorMap,
    phase: SubmissionPhase,
    selected_file: Option<SelectedFile>,
    progress: f64,
    submit_error: Option<String>,
    last_ack: Option<Ack>,
    submitted_at: Option<Instant>,
    transfer: Option<Transfer>,
    active_field_index: usize,
    checkbox_cursor: usize,
}

impl FormSession {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            fields: schema.fields.clone(),
            schema,
            errors: ErrorMap::new(),
            phase: SubmissionPhase::Editing,
            selected_file: None,
            progress: 0.0,
            submit_error: None,
            last_ack: None,
            submitted_at: None,
            transfer: None,
            active_field_index: 0,
            checkbox_cursor: 0,
        }
    }

    pub fn contact() -> Self {
        Self::new(FormSchema::contact())
    }

    pub fn registration() -> Self {
        Self::new(FormSchema::registration())
    }

    pub fn video_upload() -> Self {
        Self::new(FormSchema::video_upload())
    }

    pub fn kind(&self) -> FormKind {
        self.schema.kind
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Text of a single-value field, empty when unknown
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(FormField::as_text).unwrap_or_default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    /// Upload progress in percent, 0 to 100
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn last_ack(&self) -> Option<&Ack> {
        self.last_ack.as_ref()
    }

    pub fn accepts_file(&self) -> bool {
        self.schema.accepts_file()
    }

    /// Overwrite a field and drop its stale error. The new value is not
    /// validated until the next submit.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let changed = match self.field_mut(name) {
            Some(field) => field.set_text(value.into()),
            None => {
                tracing::debug!(form = %self.kind(), field = name, "Unknown field");
                false
            }
        };
        self.errors.remove(name);
        changed
    }

    /// Tick or untick one value of a checkbox group
    pub fn set_multi_field(&mut self, name: &str, value: &str, present: bool) -> bool {
        let changed = self
            .field_mut(name)
            .is_some_and(|field| field.set_member(value, present));
        self.errors.remove(name);
        changed
    }

    /// Fresh error map for the current values
    pub fn validate(&self) -> ErrorMap {
        rules::validate(
            &self.fields,
            self.selected_file.as_ref(),
            &self.schema.rules,
        )
    }

    /// Accept a picked file if it is a video within the size limit
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), FileRejection> {
        if !self.accepts_file() {
            return Err(FileRejection::NotAccepted);
        }
        if self.phase != SubmissionPhase::Editing {
            return Err(FileRejection::Locked);
        }
        if let Err(rejection) = file.check(self.schema.max_file_bytes) {
            tracing::debug!(file = %file.name, mime = %file.mime_type, %rejection, "File rejected");
            self.errors.insert(FILE_FIELD, rejection.to_string());
            return Err(rejection);
        }

        tracing::info!(file = %file.name, size = file.size, "Video file selected");
        self.errors.remove(FILE_FIELD);
        self.selected_file = Some(file);
        Ok(())
    }

    /// Pick a file from disk
    pub fn select_file_at(&mut self, path: &Path) -> anyhow::Result<()> {
        if !self.accepts_file() {
            return Err(FileRejection::NotAccepted.into());
        }
        if self.phase != SubmissionPhase::Editing {
            return Err(FileRejection::Locked.into());
        }
        let file = match SelectedFile::from_path(path) {
            Ok(file) => file,
            Err(err) => {
                self.errors.insert(FILE_FIELD, format!("{err:#}"));
                return Err(err);
            }
        };
        self.select_file(file)?;
        Ok(())
    }

    /// Drop the picked file. Only while editing; once sent the file stays.
    pub fn remove_file(&mut self) -> bool {
        if self.phase != SubmissionPhase::Editing || self.selected_file.is_none() {
            return false;
        }
        self.selected_file = None;
        self.progress = 0.0;
        if let Some(field) = self.field_mut(FILE_FIELD) {
            field.reset();
        }
        true
    }

    /// Validate and, if clean, hand the form to the backend.
    ///
    /// Forms without progress tracking wait for the backend and move straight
    /// to `Submitted`. The upload form starts a background transfer and moves
    /// to `Submitting`; [`FormSession::poll`] finishes it.
    pub async fn submit(&mut self, backend: &Arc<dyn SubmissionBackend>) -> SubmitOutcome {
        if self.phase != SubmissionPhase::Editing {
            tracing::debug!(form = %self.kind(), phase = ?self.phase, "Submit ignored");
            return SubmitOutcome::Ignored;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(form = %self.kind(), errors = errors.len(), "Validation failed");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.errors.clear();
        self.submit_error = None;
        let payload = self.payload();

        if self.schema.tracks_progress {
            self.start_transfer(Arc::clone(backend), payload);
            return SubmitOutcome::Started;
        }

        match backend
            .submit_form(payload, ProgressReporter::disabled())
            .await
        {
            Ok(ack) => {
                self.complete(ack);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                self.fail(err);
                SubmitOutcome::Failed
            }
        }
    }

    fn start_transfer(&mut self, backend: Arc<dyn SubmissionBackend>, payload: FormPayload) {
        let (tx, events) = mpsc::unbounded_channel();
        let reporter = ProgressReporter::new(tx.clone());
        let handle = tokio::spawn(async move {
            let result = backend.submit_form(payload, reporter).await;
            let _ = tx.send(TransferEvent::Finished(result));
        });

        tracing::info!(form = %self.kind(), "Upload started");
        self.phase = SubmissionPhase::Submitting;
        self.progress = 0.0;
        self.transfer = Some(Transfer { handle, events });
    }

    /// Apply pending transfer events and the post-submit reset timer.
    /// Call once per frame.
    pub fn poll(&mut self) {
        if let Some(result) = self.drain_transfer() {
            self.transfer = None;
            match result {
                Ok(ack) => self.complete(ack),
                Err(err) => self.fail(err),
            }
        }
        self.apply_auto_reset();
    }

    fn drain_transfer(&mut self) -> Option<Result<Ack, SubmitError>> {
        let transfer = self.transfer.as_mut()?;
        loop {
            match transfer.events.try_recv() {
                Ok(TransferEvent::Progress(percent)) => {
                    // Displayed progress never goes backwards or past 100
                    self.progress = percent.max(self.progress).min(100.0);
                }
                Ok(TransferEvent::Finished(result)) => return Some(result),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => return Some(Err(SubmitError::Interrupted)),
            }
        }
    }

    fn complete(&mut self, ack: Ack) {
        if self.schema.tracks_progress {
            self.progress = 100.0;
        }
        tracing::info!(form = %self.kind(), reference = %ack.reference, "Form submitted");
        self.phase = SubmissionPhase::Submitted;
        self.submitted_at = Some(Instant::now());
        self.last_ack = Some(ack);
    }

    fn fail(&mut self, err: SubmitError) {
        tracing::warn!(form = %self.kind(), error = %err, "Submission failed");
        self.phase = SubmissionPhase::Editing;
        self.progress = 0.0;
        self.submit_error = Some(err.to_string());
    }

    fn apply_auto_reset(&mut self) {
        let (Some(delay), Some(submitted_at)) = (self.schema.auto_reset_after, self.submitted_at)
        else {
            return;
        };
        if self.phase == SubmissionPhase::Submitted && submitted_at.elapsed() >= delay {
            tracing::debug!(form = %self.kind(), "Auto-resetting after successful submit");
            self.reset();
        }
    }

    /// Back to an empty form. Cancels any upload in flight.
    pub fn reset(&mut self) {
        if self.transfer.take().is_some() {
            tracing::info!(form = %self.kind(), "Upload cancelled");
        }
        self.fields = self.schema.fields.clone();
        self.errors.clear();
        self.phase = SubmissionPhase::Editing;
        self.selected_file = None;
        self.progress = 0.0;
        self.submit_error = None;
        self.last_ack = None;
        self.submitted_at = None;
        self.active_field_index = 0;
        self.checkbox_cursor = 0;
    }

    fn payload(&self) -> FormPayload {
        let fields = self
            .fields
            .iter()
            .filter(|f| !matches!(f.kind, FieldKind::File))
            .map(|f| (f.name.to_string(), f.value.clone()))
            .collect();
        FormPayload {
            form: self.kind(),
            fields,
            file: self.selected_file.clone(),
        }
    }

    // Keyboard editing of the focused field

    pub fn push_char(&mut self, c: char) -> bool {
        let Some(field) = self.get_active_field() else {
            return false;
        };
        if !field.accepts_typing() {
            return false;
        }
        let name = field.name;
        let mut value = field.as_text().to_string();
        value.push(c);
        self.set_field(name, value)
    }

    pub fn pop_char(&mut self) -> bool {
        let Some(field) = self.get_active_field() else {
            return false;
        };
        if !field.accepts_typing() || field.as_text().is_empty() {
            return false;
        }
        let name = field.name;
        let mut value = field.as_text().to_string();
        value.pop();
        self.set_field(name, value)
    }

    /// Step the focused dropdown to its next or previous option
    pub fn cycle_option(&mut self, forward: bool) -> bool {
        let Some(field) = self.get_active_field() else {
            return false;
        };
        let name = field.name;
        match field.cycled_option(forward) {
            Some(next) => self.set_field(name, next),
            None => false,
        }
    }

    pub fn checkbox_cursor(&self) -> usize {
        self.checkbox_cursor
    }

    pub fn move_checkbox_cursor(&mut self, forward: bool) {
        let len = match self.get_active_field() {
            Some(field) if matches!(field.kind, FieldKind::Checkboxes { .. }) => {
                field.options().len()
            }
            _ => return,
        };
        if len == 0 {
            return;
        }
        self.checkbox_cursor = if forward {
            (self.checkbox_cursor + 1) % len
        } else if self.checkbox_cursor == 0 {
            len - 1
        } else {
            self.checkbox_cursor - 1
        };
    }

    /// Flip the checkbox under the cursor
    pub fn toggle_checkbox(&mut self) -> bool {
        let Some(field) = self.get_active_field() else {
            return false;
        };
        if !matches!(field.kind, FieldKind::Checkboxes { .. }) {
            return false;
        }
        let Some(choice) = field.options().get(self.checkbox_cursor) else {
            return false;
        };
        let name = field.name;
        let present = !field.contains(choice.value);
        self.set_multi_field(name, choice.value, present)
    }
}

impl Form for FormSession {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
        self.checkbox_cursor = 0;
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
