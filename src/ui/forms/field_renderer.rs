//! Field rendering utilities for forms

use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a single-line field: bordered box plus its error line
pub const FIELD_HEIGHT: u16 = 4;

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Split a field area into the widget box and the lines reserved below it
fn split_below(area: Rect, below: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(below)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the inline validation message for a field, if any
pub fn draw_error_line(frame: &mut Frame, area: Rect, field: FieldName, error: Option<&str>) {
    if let Some(message) = error {
        tracing::trace!(error_id = %field.error_id(), text = message, "Rendering field error");
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw a text input (single or multi-line) with its error line
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let (box_area, error_area) = split_below(area, 1);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);
    draw_error_line(frame, error_area, field, error);
}

/// Draw a textarea with a remaining-characters counter under it
pub fn draw_textarea(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    remaining: isize,
    error: Option<&str>,
) {
    let (field_area, counter_area) = split_below(area, 1);
    draw_text_field(frame, field_area, field, value, is_active, true, error);

    let counter_style = if remaining < 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let counter = Paragraph::new(Line::from(Span::styled(
        format!(" {remaining} characters remaining"),
        counter_style,
    )));
    frame.render_widget(counter, counter_area);
}

/// Draw a select or radio group.
///
/// `selected` is `None` while the placeholder is showing. Radio groups list
/// every option; selects show only the current choice. A disabled field is
/// drawn dimmed and marked in its title.
#[allow(clippy::too_many_arguments)]
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    options: &[&str],
    selected: Option<usize>,
    placeholder: &str,
    is_radio: bool,
    is_active: bool,
    is_enabled: bool,
    error: Option<&str>,
) {
    let (box_area, error_area) = split_below(area, 1);
    let dim = Style::default().fg(Color::DarkGray);
    let highlight = if is_enabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        dim.add_modifier(Modifier::DIM)
    };

    let spans: Vec<Span> = if is_radio {
        options
            .iter()
            .enumerate()
            .flat_map(|(idx, option)| {
                let is_selected = selected == Some(idx);
                let marker = if is_selected { "(•) " } else { "( ) " };
                let style = if is_selected { highlight } else { Style::default() };
                [Span::styled(marker, style), Span::styled(format!("{option}   "), style)]
            })
            .collect()
    } else {
        match selected.and_then(|idx| options.get(idx)) {
            Some(option) => vec![
                Span::styled("◀ ", dim),
                Span::styled(option.to_string(), highlight),
                Span::styled(" ▶", dim),
            ],
            None => vec![
                Span::styled("◀ ", dim),
                Span::styled(placeholder.to_string(), dim),
                Span::styled(" ▶", dim),
            ],
        }
    };

    let (title, border) = if is_enabled {
        (
            format!(" {} ", field.label()),
            border_style(is_active, error.is_some()),
        )
    } else {
        (format!(" {} (disabled) ", field.label()), dim)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), box_area);
    draw_error_line(frame, error_area, field, error);
}

/// Draw a labelled checkbox
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    checked: bool,
    is_active: bool,
) {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let line = Paragraph::new(Line::from(vec![
        Span::styled(mark, style),
        Span::styled(field.label(), style),
    ]));
    frame.render_widget(line, area);
}

/// Draw help text line
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
