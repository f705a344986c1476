//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod plans;
mod videos;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Plans => plans::draw(frame, main_area, app),
        View::FreeVideos => videos::draw(frame, main_area, app),
        View::Register => forms::draw_registration(frame, main_area, app),
        View::UploadVideo => forms::draw_upload(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

/// Furthest a page's scrollable text can be scrolled, in lines
pub fn scroll_limit(view: View) -> u16 {
    let len = match view {
        View::Home => home::lines().len(),
        View::Plans => plans::detail_lines().len(),
        View::Contact => forms::contact_side_lines().len(),
        View::FreeVideos | View::Register | View::UploadVideo => 0,
    };
    u16::try_from(len.saturating_sub(1)).unwrap_or(u16::MAX)
}
