//! Layout components (sidebar, status bar)

use super::components::{render_nav_button, NavButton, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{SubmissionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 22;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the page buttons, one per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Span::styled(
        " ScienceHelp",
        Style::default().fg(Color::Cyan),
    ));
    frame.render_widget(title, chunks[0]);

    for (idx, view) in View::ALL.iter().enumerate() {
        let key = format!("F{}", idx + 1);
        let button = NavButton {
            key: &key,
            label: view.label(),
            is_selected: app.state.current_view == *view,
            is_call_to_action: *view == View::Register,
        };
        render_nav_button(frame, chunks[idx + 1], &button);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.route()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    // View-specific hints
    spans.push(Span::styled(
        format!(" {}", get_view_hints(app)),
        Style::default().fg(Color::Gray),
    ));

    if let Some((msg, _)) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    let view = app.state.current_view;
    match view {
        View::Home | View::Plans => "1-6:page  j/k:scroll  Enter:register  q:quit".to_string(),
        View::FreeVideos => {
            "type:search  Tab:subject  S-Tab:level  ↑/↓:select  Esc:clear".to_string()
        }
        View::Register | View::UploadVideo | View::Contact => {
            match app.state.session_for(view).map(|s| s.phase()) {
                Some(SubmissionPhase::Submitting) => "Uploading...".to_string(),
                Some(SubmissionPhase::Submitted) => "Enter:start over  F1-F6:page".to_string(),
                _ if view == View::UploadVideo => {
                    format!("Tab:next  Enter:pick file  Del:remove file  {SUBMIT_SHORTCUT}:upload")
                }
                _ => format!("Tab:next  ↑/↓:choose  Space:tick  {SUBMIT_SHORTCUT}:submit"),
            }
        }
    }
}
