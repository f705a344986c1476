//! Page buttons for the sidebar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per button, borders included
pub const BUTTON_HEIGHT: u16 = 3;

/// One sidebar entry
pub struct NavButton<'a> {
    /// Shortcut shown before the label, e.g. `F4`
    pub key: &'a str,
    pub label: &'a str,
    pub is_selected: bool,
    /// Drawn in the accent colour while not selected
    pub is_call_to_action: bool,
}

pub fn render_nav_button(frame: &mut Frame, area: Rect, button: &NavButton) {
    let accent = if button.is_call_to_action {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let (border_style, label_style) = if button.is_selected {
        (
            Style::default().fg(accent),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    } else if button.is_call_to_action {
        (Style::default().fg(Color::DarkGray), Style::default().fg(accent))
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", button.key),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(button.label, label_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
