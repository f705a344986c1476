//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Page title followed by its introduction
pub fn page_header(title: &str, intro: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            intro.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

/// Bold section heading with a blank line above
pub fn section_heading(title: &str) -> [Line<'static>; 2] {
    [
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// `Title` in bold, then the description
pub fn highlight_line(title: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {title}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(description.to_string()),
    ])
}
