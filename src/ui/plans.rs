//! Tuition plans page

use super::widgets::{highlight_line, page_header, section_heading};
use crate::app::App;
use crate::state::content::{OFFERED_LEVELS, OFFERINGS, PLANS, PLANS_INTRO, PLAN_BENEFITS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows given to the row of plan cards
const PLAN_CARD_HEIGHT: u16 = 16;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(PLAN_CARD_HEIGHT), // Plan cards
            Constraint::Min(0),                   // Subjects and benefits
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(page_header("Tuition Plans", PLANS_INTRO)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    draw_plan_cards(frame, chunks[1]);

    let details = Paragraph::new(detail_lines())
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0));
    frame.render_widget(details, chunks[2]);
}

/// Subjects and benefits shown under the plan cards
pub fn detail_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(section_heading("Subjects We Cover"));
    for subject in OFFERINGS {
        lines.push(highlight_line(
            &format!("{} {}", subject.icon, subject.name),
            &subject.topics.join(", "),
        ));
    }
    lines.push(Line::from(Span::styled(
        format!("  Levels: {}", OFFERED_LEVELS.join(" · ")),
        Style::default().fg(Color::Gray),
    )));

    lines.extend(section_heading("Why Choose Our Tutoring?"));
    for benefit in PLAN_BENEFITS {
        lines.push(highlight_line(benefit.title, benefit.description));
    }
    lines
}

fn draw_plan_cards(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(PLANS.iter().map(|_| Constraint::Ratio(1, PLANS.len() as u32)))
        .split(area);

    for (plan, column) in PLANS.iter().zip(columns.iter()) {
        let accent = if plan.popular {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    plan.price,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}", plan.period)),
            ]),
            Line::from(Span::styled(
                plan.description,
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        lines.extend(plan.features.iter().map(|f| Line::from(format!("✓ {f}"))));

        let title = if plan.popular {
            format!(" {} ★ Most Popular ", plan.name)
        } else {
            format!(" {} ", plan.name)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            *column,
        );
    }
}
