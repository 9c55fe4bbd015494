//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::SubmissionSink;
use crate::state::{
    AppState, EditEvent, FieldName, FocusTarget, StatusKind, SubmitOutcome, ValueKind,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Transport for accepted registrations
    sink: Box<dyn SubmissionSink>,
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.request_quit();
            return Ok(());
        }
        self.state.pending_quit = false;

        let submit_modifier = key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if submit_modifier => {
                self.submit().await;
                return Ok(());
            }
            KeyCode::Char('r') if submit_modifier => {
                self.state.session.reset();
                self.state.focus_index = 0;
                self.state.set_status(StatusKind::Info, "Form cleared");
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.next_focus();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.prev_focus();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focused() {
            FocusTarget::RegisterButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit().await;
                }
            }
            FocusTarget::Field(field) => match field.kind() {
                ValueKind::Text => self.handle_text_key(field, key),
                ValueKind::Choice => self.handle_choice_key(field, key),
                ValueKind::Flag => self.handle_flag_key(field, key),
            },
        }
        Ok(())
    }

    /// Handle bracketed paste into the focused text field
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.state.focused_field() {
            if field.kind() == ValueKind::Text {
                let pasted = if field == FieldName::Bio {
                    text.to_string()
                } else {
                    text.replace(['\r', '\n'], "")
                };
                self.edit_text(field, |value| value.push_str(&pasted));
            }
        }
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.edit_text(field, |value| value.push(c))
            }
            KeyCode::Backspace => self.edit_text(field, |value| {
                value.pop();
            }),
            KeyCode::Enter if field == FieldName::Bio => {
                self.edit_text(field, |value| value.push('\n'))
            }
            KeyCode::Enter | KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, field: FieldName, key: KeyEvent) {
        let forward = match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
            KeyCode::Left | KeyCode::Char('h') => false,
            KeyCode::Enter | KeyCode::Down => {
                self.state.next_focus();
                return;
            }
            KeyCode::Up => {
                self.state.prev_focus();
                return;
            }
            _ => return,
        };

        let values = self.state.session.values();
        if !values.is_enabled(field) {
            return;
        }
        let choice = match field {
            FieldName::PhoneType if forward => values.phone_type.next_option().as_str(),
            FieldName::PhoneType => values.phone_type.prev_option().as_str(),
            FieldName::Staff if forward => values.staff.next_option().as_str(),
            FieldName::Staff => values.staff.prev_option().as_str(),
            _ => return,
        };
        self.state
            .session
            .apply(EditEvent::text(field.as_str(), choice));
    }

    fn handle_flag_key(&mut self, field: FieldName, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let checked = !self.state.session.values().email_notifications;
                self.state
                    .session
                    .apply(EditEvent::flag(field.as_str(), checked));
            }
            KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            _ => {}
        }
    }

    /// Derive the new raw value of a text field and hand it to the session
    fn edit_text(&mut self, field: FieldName, change: impl FnOnce(&mut String)) {
        let mut value = self
            .state
            .session
            .values()
            .text(field)
            .unwrap_or_default()
            .to_string();
        change(&mut value);
        self.state.session.apply(EditEvent::text(field.as_str(), value));
    }

    /// Validate and, when the form is clean, deliver the record
    pub async fn submit(&mut self) {
        match self.state.session.submit() {
            SubmitOutcome::Submitted(record) => {
                match self.sink.deliver(&record).await {
                    Ok(()) => {
                        self.state.submissions_delivered += 1;
                        self.state
                            .set_status(StatusKind::Success, "Registration submitted");
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Failed to deliver submission");
                        self.state.set_status(
                            StatusKind::Error,
                            format!("Submission could not be delivered: {err}"),
                        );
                    }
                }
                self.state.last_submission = Some(record);
                self.state.focus_index = 0;
            }
            SubmitOutcome::Rejected(errors) => {
                let count = errors.len();
                let noun = if count == 1 { "error" } else { "errors" };
                self.state
                    .set_status(StatusKind::Error, format!("Please fix {count} {noun}"));
                if let Some((field, _)) = errors.iter().next() {
                    self.state.focus_field(field);
                }
            }
        }
    }

    fn request_quit(&mut self) {
        let needs_confirm = self.config.confirm_quit() && !self.state.session.is_pristine();
        if !needs_confirm || self.state.pending_quit {
            self.quit = true;
        } else {
            self.state.pending_quit = true;
            self.state
                .set_status(StatusKind::Info, "Press Esc again to discard and quit");
        }
    }
}
