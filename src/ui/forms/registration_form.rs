//! Registration form rendering

use super::field_renderer::{
    draw_checkbox, draw_choice_field, draw_help_text, draw_text_field, draw_textarea,
    FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{FieldName, FocusTarget, PhoneType, StaffRole};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const PHONE_TYPE_PLACEHOLDER: &str = "Select Phone Type";

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.session;
    let values = session.values();
    let focused = app.state.focused();
    let is_active = |field: FieldName| focused == FocusTarget::Field(field);

    let border_color = if session.errors().is_empty() {
        Color::Cyan
    } else {
        Color::Red
    };
    let block = Block::default()
        .title(" User Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Phone
            Constraint::Length(FIELD_HEIGHT),  // PhoneType
            Constraint::Length(FIELD_HEIGHT),  // Staff
            Constraint::Min(6),                // Bio
            Constraint::Length(1),             // Notifications
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    for (idx, field) in [FieldName::Name, FieldName::Email, FieldName::Phone]
        .into_iter()
        .enumerate()
    {
        draw_text_field(
            frame,
            chunks[idx],
            field,
            values.text(field).unwrap_or_default(),
            is_active(field),
            false,
            session.error_for(field),
        );
    }

    let phone_options: Vec<&str> = PhoneType::OPTIONS.iter().map(|o| o.as_str()).collect();
    draw_choice_field(
        frame,
        chunks[3],
        FieldName::PhoneType,
        &phone_options,
        PhoneType::OPTIONS.iter().position(|o| *o == values.phone_type),
        PHONE_TYPE_PLACEHOLDER,
        false,
        is_active(FieldName::PhoneType),
        values.is_enabled(FieldName::PhoneType),
        session.error_for(FieldName::PhoneType),
    );

    let staff_options: Vec<&str> = StaffRole::OPTIONS.iter().map(|o| o.as_str()).collect();
    draw_choice_field(
        frame,
        chunks[4],
        FieldName::Staff,
        &staff_options,
        StaffRole::OPTIONS.iter().position(|o| *o == values.staff),
        "",
        true,
        is_active(FieldName::Staff),
        values.is_enabled(FieldName::Staff),
        session.error_for(FieldName::Staff),
    );

    draw_textarea(
        frame,
        chunks[5],
        FieldName::Bio,
        &values.bio,
        is_active(FieldName::Bio),
        session.bio_characters_remaining(),
        session.error_for(FieldName::Bio),
    );

    draw_checkbox(
        frame,
        chunks[6],
        FieldName::EmailNotifications,
        values.email_notifications,
        is_active(FieldName::EmailNotifications),
    );

    let button_area = Rect {
        width: chunks[7].width.min(20),
        ..chunks[7]
    };
    render_button(
        frame,
        button_area,
        "Register",
        focused == FocusTarget::RegisterButton,
        Color::Green,
    );

    draw_help_text(
        frame,
        chunks[8],
        &[
            ("Tab", "next field"),
            ("←/→", "choose"),
            ("Space", "toggle"),
            (crate::platform::SUBMIT_SHORTCUT, "register"),
            (crate::platform::CLEAR_SHORTCUT, "clear"),
            ("Esc", "quit"),
        ],
    );
}
