//! Application state definitions

use super::catalog::{seed_videos, CatalogFilter, Video};
use super::forms::{FormSchema, FormSession, SubmissionPhase};
use crate::config::SiteConfig;
use std::time::Instant;

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Plans,
    FreeVideos,
    Register,
    UploadVideo,
    Contact,
}

impl View {
    /// Pages in navigation order
    pub const ALL: [View; 6] = [
        View::Home,
        View::Plans,
        View::FreeVideos,
        View::Register,
        View::UploadVideo,
        View::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Plans => "Tuition Plans",
            Self::FreeVideos => "Free Videos",
            Self::Register => "Register",
            Self::UploadVideo => "Upload Video",
            Self::Contact => "Contact",
        }
    }

    /// Path of the matching page on the website
    pub fn route(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Plans => "/tuition-plans",
            Self::FreeVideos => "/free-videos",
            Self::Register => "/register",
            Self::UploadVideo => "/upload-video",
            Self::Contact => "/contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pages where typed characters go into a form
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Register | Self::UploadVideo | Self::Contact)
    }
}

pub struct AppState {
    // Navigation
    pub current_view: View,

    // Free videos
    pub videos: Vec<Video>,
    pub catalog_filter: CatalogFilter,
    pub selected_index: usize,

    // One independent session per form page
    pub contact: FormSession,
    pub registration: FormSession,
    pub upload: FormSession,

    // UI state
    pub scroll_offset: u16,
    pub status_message: Option<(String, Instant)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl AppState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            current_view: View::default(),
            videos: seed_videos(),
            catalog_filter: CatalogFilter::default(),
            selected_index: 0,
            contact: FormSession::new(
                FormSchema::contact().with_reset_delay(config.contact_reset_delay()),
            ),
            registration: FormSession::registration(),
            upload: FormSession::new(
                FormSchema::video_upload().with_max_file_bytes(config.max_upload_bytes()),
            ),
            scroll_offset: 0,
            status_message: None,
        }
    }

    /// Switch pages. The page being left starts over next time, as if it
    /// were reloaded; an upload in flight there is cancelled.
    pub fn navigate(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        let left = self.current_view;
        match left {
            View::FreeVideos => {
                self.catalog_filter.clear();
                self.selected_index = 0;
            }
            View::Register | View::UploadVideo | View::Contact => {
                if let Some(session) = self.session_for_mut(left) {
                    session.reset();
                }
            }
            View::Home | View::Plans => {}
        }
        tracing::debug!(from = left.route(), to = view.route(), "Navigate");
        self.current_view = view;
        self.scroll_offset = 0;
        self.status_message = None;
    }

    /// Form session backing a page, if the page has one
    pub fn session_for(&self, view: View) -> Option<&FormSession> {
        match view {
            View::Register => Some(&self.registration),
            View::UploadVideo => Some(&self.upload),
            View::Contact => Some(&self.contact),
            _ => None,
        }
    }

    pub fn session_for_mut(&mut self, view: View) -> Option<&mut FormSession> {
        match view {
            View::Register => Some(&mut self.registration),
            View::UploadVideo => Some(&mut self.upload),
            View::Contact => Some(&mut self.contact),
            _ => None,
        }
    }

    pub fn active_session_mut(&mut self) -> Option<&mut FormSession> {
        self.session_for_mut(self.current_view)
    }

    /// Whether a transfer is running and the UI should refresh quickly
    pub fn is_uploading(&self) -> bool {
        self.upload.phase() == SubmissionPhase::Submitting
    }

    /// Advance every session's transfer and reset timers
    pub fn poll_sessions(&mut self) {
        self.contact.poll();
        self.registration.poll();
        self.upload.poll();
    }

    // Free videos

    pub fn filtered_videos(&self) -> Vec<&Video> {
        self.catalog_filter.apply(&self.videos)
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.filtered_videos().get(self.selected_index).copied()
    }

    /// Keep the selection inside the filtered list after a filter change
    pub fn clamp_selection(&mut self) {
        let count = self.filtered_videos().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Scroll down, stopping at `limit`
    pub fn scroll_down(&mut self, limit: u16) {
        if self.scroll_offset < limit {
            self.scroll_offset += 1;
        }
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self, max_age: std::time::Duration) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() >= max_age)
        {
            self.status_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SimulatedBackend, SubmissionBackend};
    use crate::state::SelectedFile;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_view_order_and_routes() {
        assert_eq!(View::default(), View::Home);
        assert_eq!(View::from_index(2), Some(View::FreeVideos));
        assert_eq!(View::from_index(6), None);
        assert_eq!(View::UploadVideo.route(), "/upload-video");
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_form_views() {
        let forms: Vec<View> = View::ALL
            .into_iter()
            .filter(View::is_form_view)
            .collect();
        assert_eq!(forms, vec![View::Register, View::UploadVideo, View::Contact]);
    }

    #[test]
    fn test_each_form_page_has_its_own_session() {
        let mut state = AppState::default();
        state.navigate(View::Contact);
        state.active_session_mut().unwrap().set_field("name", "Ada");

        assert_eq!(state.contact.value("name"), "Ada");
        assert_eq!(state.registration.value("firstName"), "");
        assert!(state.session_for(View::Home).is_none());
    }

    #[test]
    fn test_leaving_a_form_page_resets_it() {
        let mut state = AppState::default();
        state.navigate(View::Register);
        state.registration.set_field("firstName", "Grace");

        state.navigate(View::Contact);
        state.contact.set_field("name", "Ada");
        state.navigate(View::Register);

        assert_eq!(state.registration.value("firstName"), "");
        assert_eq!(state.contact.value("name"), "");
    }

    #[test]
    fn test_same_page_navigation_keeps_state() {
        let mut state = AppState::default();
        state.navigate(View::Contact);
        state.contact.set_field("name", "Ada");
        state.navigate(View::Contact);
        assert_eq!(state.contact.value("name"), "Ada");
    }

    #[test]
    fn test_leaving_free_videos_clears_filter() {
        let mut state = AppState::default();
        state.navigate(View::FreeVideos);
        state.catalog_filter.search = "quadratic".to_string();
        assert_eq!(state.filtered_videos().len(), 1);

        state.navigate(View::Home);
        assert!(state.catalog_filter.is_default());
        assert_eq!(state.filtered_videos().len(), 6);
    }

    #[test]
    fn test_clamp_selection_after_filter() {
        let mut state = AppState::default();
        state.selected_index = 5;
        state.catalog_filter.subject = "Physics".to_string();
        state.clamp_selection();
        assert_eq!(state.selected_index, 1);
        assert_eq!(
            state.selected_video().map(|v| v.title.as_str()),
            Some("Thermodynamics Basics")
        );

        state.catalog_filter.search = "no such video".to_string();
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_video().is_none());
    }

    #[test]
    fn test_config_overrides_reach_sessions() {
        let config = SiteConfig {
            max_upload_bytes: Some(1024),
            ..Default::default()
        };
        let mut state = AppState::new(&config);
        let big = SelectedFile::new("lesson.mp4", 2048, "video/mp4");
        assert!(state.upload.select_file(big).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigating_away_cancels_upload() {
        let backend: Arc<dyn SubmissionBackend> =
            Arc::new(SimulatedBackend::default().with_seed(5));
        let mut state = AppState::default();
        state.navigate(View::UploadVideo);
        state
            .upload
            .select_file(SelectedFile::new("lesson.mp4", 4096, "video/mp4"))
            .unwrap();
        state.upload.set_field("title", "Vectors");
        state.upload.set_field("description", "Adding vectors");
        state.upload.set_field("subject", "Physics");
        state.upload.set_field("level", "College");
        state.upload.submit(&backend).await;
        assert!(state.is_uploading());

        state.navigate(View::Home);
        tokio::time::sleep(Duration::from_secs(120)).await;
        state.poll_sessions();

        assert!(!state.is_uploading());
        assert_eq!(state.upload.phase(), SubmissionPhase::Editing);
        assert_eq!(state.upload.progress(), 0.0);
    }

    #[test]
    fn test_scroll_stops_at_limit() {
        let mut state = AppState::default();
        for _ in 0..10 {
            state.scroll_down(3);
        }
        assert_eq!(state.scroll_offset, 3);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 2);

        state.scroll_offset = u16::MAX;
        state.scroll_down(u16::MAX);
        assert_eq!(state.scroll_offset, u16::MAX);
    }

    #[test]
    fn test_status_expires() {
        let mut state = AppState::default();
        state.set_status("Saved");
        state.expire_status(Duration::from_secs(60));
        assert!(state.status_message.is_some());
        state.expire_status(Duration::ZERO);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_navigate_clears_status_and_scroll() {
        let mut state = AppState::default();
        state.scroll_down(10);
        state.set_status("hello");
        state.navigate(View::Plans);
        assert_eq!(state.scroll_offset, 0);
        assert!(state.status_message.is_none());
    }
}
