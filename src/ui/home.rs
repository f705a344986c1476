//! Home page

use super::widgets::{highlight_line, page_header, section_heading};
use crate::app::App;
use crate::state::content::{HERO_SUBTITLE, HERO_TITLE, HOME_FEATURES, OFFERINGS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0));
    frame.render_widget(paragraph, area);
}

/// Hero, subjects, highlights and the closing call to action
pub fn lines() -> Vec<Line<'static>> {
    let mut lines = page_header(HERO_TITLE, HERO_SUBTITLE);
    lines.push(Line::from(Span::styled(
        "Enter: Get Started    3: Watch Free Videos",
        Style::default().fg(Color::Green),
    )));

    lines.extend(section_heading("Subjects I Teach"));
    for subject in OFFERINGS {
        lines.push(highlight_line(
            &format!("{} {}", subject.icon, subject.name),
            subject.summary,
        ));
    }

    lines.extend(section_heading("Why Choose Our Tutoring?"));
    for feature in HOME_FEATURES {
        lines.push(highlight_line(feature.title, feature.description));
    }

    lines.extend(section_heading("Ready to Excel in Science?"));
    lines.push(Line::from(
        "  Join hundreds of students who have improved their grades with our tutoring",
    ));
    lines
}
