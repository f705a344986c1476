//! Application state and core logic

use crate::backend::{SimulatedBackend, SubmissionBackend};
use crate::config::SiteConfig;
use crate::platform;
use crate::ui;
use crate::state::{AppState, FieldKind, Form, SubmissionPhase, SubmitOutcome, View, FILE_FIELD};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How long a status bar message stays visible
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated forms go
    backend: Arc<dyn SubmissionBackend>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated server
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_backend(config, Arc::new(SimulatedBackend::from_config(config)))
    }

    pub fn with_backend(config: &SiteConfig, backend: Arc<dyn SubmissionBackend>) -> Self {
        Self {
            state: AppState::new(config),
            backend,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the screen is changing without input and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.is_uploading()
    }

    /// Advance timers and transfers. Called once per frame.
    pub fn tick(&mut self) {
        let was_uploading = self.state.is_uploading();
        self.state.poll_sessions();
        if was_uploading && !self.state.is_uploading() {
            if let Some(err) = self.state.upload.submit_error() {
                let message = err.to_string();
                self.state.set_status(message);
            }
        }
        self.state.expire_status(STATUS_TTL);
    }

    /// Navigate to a page
    pub fn navigate(&mut self, view: View) {
        self.state.navigate(view);
    }

    /// Handle key events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // F1-F6 switch pages from anywhere
        if let KeyCode::F(n) = key.code {
            if let Some(view) = usize::from(n).checked_sub(1).and_then(View::from_index) {
                self.navigate(view);
            }
            return Ok(());
        }

        let view = self.state.current_view;
        if view.is_form_view() {
            self.handle_form_key(key).await?;
        } else if view == View::FreeVideos {
            self.handle_videos_key(key);
        } else {
            self.handle_page_key(key);
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::from_index(index) {
                    self.navigate(view);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            // Both pages end with a call to book a session
            KeyCode::Enter => self.navigate(View::Register),
            _ => {}
        }
    }

    fn handle_videos_key(&mut self, key: KeyEvent) {
        let filter = &mut self.state.catalog_filter;
        match key.code {
            KeyCode::Esc => {
                filter.clear();
                self.state.selected_index = 0;
            }
            KeyCode::Tab => filter.cycle_subject(),
            KeyCode::BackTab => filter.cycle_level(),
            KeyCode::Backspace => {
                filter.search.pop();
            }
            KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Down => {
                let count = self.state.filtered_videos().len();
                self.state.move_selection_down(count);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                filter.search.push(c);
            }
            _ => {}
        }
        self.state.clamp_selection();
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let view = self.state.current_view;
        let Some(session) = self.state.session_for_mut(view) else {
            return Ok(());
        };

        match session.phase() {
            SubmissionPhase::Submitted => {
                if key.code == KeyCode::Enter {
                    session.reset();
                }
                return Ok(());
            }
            SubmissionPhase::Submitting => return Ok(()),
            SubmissionPhase::Editing => {}
        }

        if platform::is_submit_key(&key) {
            self.submit_current().await;
            return Ok(());
        }

        let Some(kind) = session.get_active_field().map(|f| f.kind) else {
            return Ok(());
        };
        match (key.code, kind) {
            (KeyCode::Tab, _) => session.next_field(),
            (KeyCode::BackTab, _) => session.prev_field(),
            (KeyCode::Up, FieldKind::Select { .. }) => {
                session.cycle_option(false);
            }
            (KeyCode::Down, FieldKind::Select { .. }) => {
                session.cycle_option(true);
            }
            (KeyCode::Left, FieldKind::Checkboxes { .. }) => session.move_checkbox_cursor(false),
            (KeyCode::Right, FieldKind::Checkboxes { .. }) => session.move_checkbox_cursor(true),
            (KeyCode::Char(' ') | KeyCode::Enter, FieldKind::Checkboxes { .. }) => {
                session.toggle_checkbox();
            }
            (KeyCode::Enter, FieldKind::Text { multiline: true }) => {
                session.push_char('\n');
            }
            (KeyCode::Enter, FieldKind::File) => {
                let typed = session.value(FILE_FIELD).to_string();
                self.pick_file(&typed);
            }
            (KeyCode::Enter, _) => session.next_field(),
            (KeyCode::Delete, _) => {
                if session.remove_file() {
                    self.state.set_status("File removed");
                }
            }
            (KeyCode::Backspace, _) => {
                session.pop_char();
            }
            (KeyCode::Char(c), _) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                session.push_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and send the form on the current page
    async fn submit_current(&mut self) {
        let view = self.state.current_view;
        let backend = Arc::clone(&self.backend);
        let Some(session) = self.state.session_for_mut(view) else {
            return;
        };
        let outcome = session.submit(&backend).await;
        let failure = session.submit_error().map(str::to_string);
        tracing::debug!(page = view.route(), ?outcome, "Submit");

        match outcome {
            SubmitOutcome::Invalid => self.state.set_status("Please fix the highlighted fields"),
            SubmitOutcome::Failed => {
                if let Some(message) = failure {
                    self.state.set_status(message);
                }
            }
            SubmitOutcome::Started => self.state.set_status("Uploading..."),
            SubmitOutcome::Submitted | SubmitOutcome::Ignored => {}
        }
    }

    /// Select a video from a typed or dropped path
    fn pick_file(&mut self, raw: &str) {
        let Some(path) = dropped_path(raw) else {
            return;
        };
        let upload = &mut self.state.upload;
        upload.set_field(FILE_FIELD, path.display().to_string());
        match upload.select_file_at(&path) {
            Ok(()) => {
                if let Some(file) = upload.selected_file() {
                    let message = format!("Selected {}", file.name);
                    self.state.set_status(message);
                }
            }
            Err(err) => tracing::debug!(path = %path.display(), "File not selected: {err:#}"),
        }
    }

    /// Handle bracketed paste. Terminals deliver a drag-and-dropped file as
    /// a pasted path, so on the upload page a paste picks the file.
    pub fn handle_paste(&mut self, text: &str) {
        match self.state.current_view {
            View::UploadVideo => {
                if self.state.upload.phase() == SubmissionPhase::Editing {
                    self.pick_file(text);
                }
            }
            View::FreeVideos => {
                self.state.catalog_filter.search.push_str(text.trim());
                self.state.clamp_selection();
            }
            View::Register | View::Contact => {
                if let Some(session) = self.state.active_session_mut() {
                    if session.phase() == SubmissionPhase::Editing {
                        for c in text.chars().filter(|c| *c != '\r') {
                            session.push_char(c);
                        }
                    }
                }
            }
            View::Home | View::Plans => {}
        }
    }

    fn scroll_down(&mut self) {
        let limit = ui::scroll_limit(self.state.current_view);
        self.state.scroll_down(limit);
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.scroll_down(),
            _ => {}
        }
    }
}

/// Turn pasted or typed text into a path: first line only, surrounding
/// quotes and `file://` stripped, shell-escaped spaces unescaped.
fn dropped_path(raw: &str) -> Option<PathBuf> {
    let line = raw.lines().next()?.trim();
    let unquoted = line
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| line.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(line);
    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let path = path.replace("\\ ", " ");
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
