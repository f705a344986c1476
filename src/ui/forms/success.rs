//! Confirmation screens shown after a successful submit

use crate::state::content::REGISTRATION_NEXT_STEPS;
use crate::state::FormSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_registration(frame: &mut Frame, area: Rect, session: &FormSession) {
    let mut lines = vec![Line::from(format!(
        "Thank you for registering, {}! I'll review your information and get back to you \
         within 24 hours to discuss your tutoring plan.",
        session.value("firstName")
    ))];
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "What happens next?",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        REGISTRATION_NEXT_STEPS
            .iter()
            .map(|step| Line::from(format!("• {step}"))),
    );
    draw_confirmation(
        frame,
        area,
        "Registration Successful!",
        lines,
        session,
        "Enter: Register Another Student",
    );
}

pub fn draw_upload(frame: &mut Frame, area: Rect, session: &FormSession) {
    let file_name = session
        .selected_file()
        .map(|f| f.name.as_str())
        .unwrap_or_default();
    let lines = vec![
        Line::from(format!(
            "Your video \"{}\" has been uploaded and will be available to students shortly.",
            session.value("title")
        )),
        Line::from(""),
        detail("Subject", session.value("subject")),
        detail("Level", session.value("level")),
        detail("File", file_name),
    ];
    draw_confirmation(
        frame,
        area,
        "Video Uploaded Successfully!",
        lines,
        session,
        "Enter: Upload Another Video",
    );
}

pub fn draw_contact(frame: &mut Frame, area: Rect, session: &FormSession) {
    let lines = vec![Line::from(format!(
        "Thank you for contacting me, {}! I'll get back to you within 24 hours.",
        session.value("name")
    ))];
    draw_confirmation(frame, area, "Message Sent Successfully!", lines, session, "");
}

fn detail(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

fn draw_confirmation(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: Vec<Line<'static>>,
    session: &FormSession,
    action: &str,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            "✅",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);

    if let Some(ack) = session.last_ack() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Reference {} · {}",
                ack.reference,
                ack.received_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !action.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            action.to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
