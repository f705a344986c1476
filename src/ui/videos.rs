//! Free videos page: search, filters, results and study tips

use super::widgets::{highlight_line, page_header, render_scrollable_list, section_heading};
use crate::app::App;
use crate::state::content::{VIDEOS_INTRO, VIDEO_TIPS};
use crate::state::{format_date, format_views};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search and filters
            Constraint::Min(6),    // Results
            Constraint::Length(7), // Tips
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(page_header("Free Educational Videos", VIDEOS_INTRO))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );
    draw_filters(frame, chunks[1], app);

    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);
    draw_results(frame, results[0], app);
    draw_selected(frame, results[1], app);

    let mut tips = section_heading("How to Make the Most of These Videos").to_vec();
    tips.extend(
        VIDEO_TIPS
            .iter()
            .enumerate()
            .map(|(i, tip)| highlight_line(&format!("{}. {}", i + 1, tip.title), tip.description)),
    );
    frame.render_widget(Paragraph::new(tips).wrap(Wrap { trim: true }), chunks[3]);
}

fn draw_filters(frame: &mut Frame, area: Rect, app: &App) {
    let filter = &app.state.catalog_filter;
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(filter.search.as_str(), Style::default().fg(Color::Cyan)),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
        Span::styled("   Subject: ", Style::default().fg(Color::Gray)),
        Span::raw(filter.subject.as_str()),
        Span::styled("   Level: ", Style::default().fg(Color::Gray)),
        Span::raw(filter.level.as_str()),
    ]);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    if !filter.is_default() {
        block = block.title(" Esc to clear ");
    }
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let videos = app.state.filtered_videos();
    let title = format!(" Videos ({}) ", videos.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if videos.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No videos found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Try adjusting your search terms or filters"),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = videos
        .iter()
        .map(|video| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>6} ", video.duration),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(video.title.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn draw_selected(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(video) = app.state.selected_video() else {
        frame.render_widget(block, area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            video.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(video.subject.as_str(), Style::default().fg(Color::Yellow)),
            Span::raw("  ·  "),
            Span::raw(video.level.as_str()),
            Span::raw("  ·  "),
            Span::raw(video.duration.as_str()),
        ]),
        Line::from(""),
        Line::from(video.description.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} views   Uploaded {}",
                format_views(video.views),
                format_date(video.uploaded)
            ),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
