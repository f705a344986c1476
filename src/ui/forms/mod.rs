//! Form rendering module
//!
//! - `field_renderer`: one bordered box per field
//! - `success`: confirmation screens shown after a submit
//! - this file: the editable form pages for register, upload and contact

mod field_renderer;
mod success;

use super::widgets::{highlight_line, page_header, section_heading};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::content::{
    CONTACT_CHANNELS, CONTACT_INTRO, FAQS, REGISTER_INTRO, UPLOAD_GUIDELINES, UPLOAD_INTRO,
};
use crate::state::{Form, FormSession, SubmissionPhase, FILE_FIELD};
use field_renderer::{draw_field, draw_help_text, field_height, FieldView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.registration;
    if session.phase() == SubmissionPhase::Submitted {
        success::draw_registration(frame, area, session);
        return;
    }
    draw_form_page(frame, area, session, REGISTER_INTRO);
}

pub fn draw_upload(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.upload;
    if session.phase() == SubmissionPhase::Submitted {
        success::draw_upload(frame, area, session);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);
    draw_form_page(frame, columns[0], session, UPLOAD_INTRO);

    let guidelines: Vec<Line> = UPLOAD_GUIDELINES
        .iter()
        .map(|g| Line::from(format!("• {g}")))
        .collect();
    let block = Block::default()
        .title(" Upload Guidelines ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(guidelines)
            .block(block)
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.contact;
    if session.phase() == SubmissionPhase::Submitted {
        success::draw_contact(frame, area, session);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    draw_form_page(frame, columns[0], session, CONTACT_INTRO);

    frame.render_widget(
        Paragraph::new(contact_side_lines())
            .wrap(Wrap { trim: false })
            .scroll((app.state.scroll_offset, 0)),
        columns[1],
    );
}

/// Contact channels and the FAQ beside the contact form
pub fn contact_side_lines() -> Vec<Line<'static>> {
    let mut lines = section_heading("Get in Touch").to_vec();
    for channel in CONTACT_CHANNELS {
        lines.push(highlight_line(channel.title, channel.details));
        lines.push(Line::from(Span::styled(
            format!("    {}", channel.description),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.extend(section_heading("Frequently Asked Questions"));
    for faq in FAQS {
        lines.push(Line::from(Span::styled(
            format!("  {}", faq.question),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", faq.answer)));
    }
    lines
}

/// Header, the visible window of fields, then progress or feedback and help
fn draw_form_page(frame: &mut Frame, area: Rect, session: &FormSession, intro: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Fields
            Constraint::Length(3), // Progress or submit feedback
            Constraint::Length(1), // Help text
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(page_header(session.kind().title(), intro)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    draw_fields(frame, chunks[1], session);
    draw_feedback(frame, chunks[2], session);

    let submit_label = if session.accepts_file() {
        "upload"
    } else {
        "submit"
    };
    draw_help_text(
        frame,
        chunks[3],
        &[
            ("Tab", "next field"),
            ("S-Tab", "previous"),
            (SUBMIT_SHORTCUT, submit_label),
        ],
    );
}

fn draw_fields(frame: &mut Frame, area: Rect, session: &FormSession) {
    let heights: Vec<u16> = session.fields().iter().map(field_height).collect();
    let start = first_visible_field(&heights, session.active_field(), area.height);

    let mut y = area.y;
    for (idx, field) in session.fields().iter().enumerate().skip(start) {
        let height = heights[idx];
        if y + height > area.y + area.height {
            break;
        }
        let view = FieldView {
            field,
            is_active: idx == session.active_field(),
            error: session.error(field.name),
            checkbox_cursor: session.checkbox_cursor(),
            file: if field.name == FILE_FIELD {
                session.selected_file()
            } else {
                None
            },
        };
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_field(frame, rect, &view);
        y += height;
    }
}

/// First field to draw so the focused one fits in `available` rows
fn first_visible_field(heights: &[u16], active: usize, available: u16) -> usize {
    let Some(active_height) = heights.get(active) else {
        return 0;
    };
    let mut start = active;
    let mut used = *active_height;
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    start
}

fn draw_feedback(frame: &mut Frame, area: Rect, session: &FormSession) {
    if session.phase() == SubmissionPhase::Submitting {
        let percent = session.progress().round().clamp(0.0, 100.0) as u16;
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Uploading... ")
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent)
            .label(format!("{percent}%"));
        frame.render_widget(gauge, area);
        return;
    }

    let line = if let Some(message) = session.submit_error() {
        Line::from(Span::styled(
            format!("✗ {message}"),
            Style::default().fg(Color::Red),
        ))
    } else if !session.errors().is_empty() {
        let labels: Vec<&str> = session
            .errors()
            .fields()
            .map(|name| {
                session
                    .field(name)
                    .map_or(name, |f| f.label.trim_end_matches(" *"))
            })
            .collect();
        Line::from(Span::styled(
            format!("Please check: {}", labels.join(", ")),
            Style::default().fg(Color::Red),
        ))
    } else {
        return;
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::TOP)),
        area,
    );
}
