//! Layout components (form area, status bar)

use crate::app::App;
use crate::state::StatusKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is allowed to grow
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into a centered form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let width = rows[0].width.min(MAX_FORM_WIDTH);
    let form_area = Rect {
        x: rows[0].x + (rows[0].width - width) / 2,
        width,
        ..rows[0]
    };

    (form_area, rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.sink_name()),
        Style::default().fg(Color::Black).bg(Color::Gray),
    )];

    spans.push(Span::styled(
        format!(" sent: {} ", app.state.submissions_delivered),
        Style::default().fg(Color::Gray),
    ));

    if let Some(status) = &app.state.status {
        let color = match status.kind {
            StatusKind::Info => Color::Yellow,
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(&status.text, Style::default().fg(color)));
    }

    if let Some(record) = &app.state.last_submission {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("last: {} at {}", record.email(), record.submitted_on_iso()),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
