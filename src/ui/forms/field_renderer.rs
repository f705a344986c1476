//! Field rendering utilities for forms

use crate::state::{format_file_size, FieldKind, FormField, SelectedFile};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        5
    } else if field.kind == FieldKind::File {
        4
    } else {
        3
    }
}

/// How a field is drawn this frame
pub struct FieldView<'a> {
    pub field: &'a FormField,
    pub is_active: bool,
    pub error: Option<&'a str>,
    /// Highlighted option in a checkbox group
    pub checkbox_cursor: usize,
    /// Picked file, for the file field
    pub file: Option<&'a SelectedFile>,
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let field = view.field;
    let border_style = if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match field.kind {
        FieldKind::Text { .. } => text_lines(field, view.is_active),
        FieldKind::Select { .. } => select_lines(field, view.is_active),
        FieldKind::Checkboxes { options } => {
            let spans = options
                .iter()
                .enumerate()
                .flat_map(|(idx, choice)| {
                    let mark = if field.contains(choice.value) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    let style = if view.is_active && idx == view.checkbox_cursor {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    [
                        Span::styled(format!("{mark} {}", choice.label), style),
                        Span::raw("   "),
                    ]
                })
                .collect::<Vec<_>>();
            vec![Line::from(spans)]
        }
        FieldKind::File => file_lines(field, view.is_active, view.file),
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = view.error {
        block = block.title_bottom(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn cursor_span() -> Span<'static> {
    Span::styled("▌", Style::default().fg(Color::Cyan))
}

/// Placeholder shown in an empty, unfocused field
fn placeholder(field: &FormField) -> Line<'static> {
    let text = field.hint.unwrap_or("(empty)");
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn text_lines(field: &FormField, is_active: bool) -> Vec<Line<'static>> {
    let value = field.as_text();
    if value.is_empty() && !is_active {
        return vec![placeholder(field)];
    }

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    // split('\n') keeps a trailing empty line so the cursor follows Enter
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span());
        }
    }
    lines
}

fn select_lines(field: &FormField, is_active: bool) -> Vec<Line<'static>> {
    let label = field.display_value();
    let mut spans = if label.is_empty() {
        vec![Span::styled(
            "Select...",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(label)]
    };
    if is_active {
        spans.push(Span::styled("  ↑/↓", Style::default().fg(Color::DarkGray)));
    }
    vec![Line::from(spans)]
}

fn file_lines(
    field: &FormField,
    is_active: bool,
    file: Option<&SelectedFile>,
) -> Vec<Line<'static>> {
    let mut lines = text_lines(field, is_active);
    let status = match file {
        Some(file) => Line::from(vec![
            Span::styled("🎬 ", Style::default()),
            Span::styled(
                file.name.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format_file_size(file.size)),
                Style::default().fg(Color::Gray),
            ),
        ]),
        None => Line::from(Span::styled(
            "Drag and drop your video here, or type its path",
            Style::default().fg(Color::DarkGray),
        )),
    };
    lines.truncate(1);
    lines.push(status);
    lines
}

/// Draw help text for form navigation
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}")));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
