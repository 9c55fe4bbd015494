//! Application state definitions

use super::forms::{FieldName, FormSession, SubmissionRecord};

/// Focusable widget on the registration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    RegisterButton,
}

/// Number of focusable widgets (every field plus the Register button)
pub const FOCUS_COUNT: usize = FieldName::ALL.len() + 1;

/// Severity of the status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Presentation state wrapped around one form session
#[derive(Debug, Default)]
pub struct AppState {
    pub session: FormSession,
    pub focus_index: usize,
    pub status: Option<StatusMessage>,
    /// Most recent accepted submission
    pub last_submission: Option<SubmissionRecord>,
    pub submissions_delivered: usize,
    /// Esc was pressed once with unsent input
    pub pending_quit: bool,
}

impl AppState {
    pub fn focused(&self) -> FocusTarget {
        FieldName::ALL
            .get(self.focus_index)
            .copied()
            .map(FocusTarget::Field)
            .unwrap_or(FocusTarget::RegisterButton)
    }

    pub fn focused_field(&self) -> Option<FieldName> {
        match self.focused() {
            FocusTarget::Field(field) => Some(field),
            FocusTarget::RegisterButton => None,
        }
    }

    pub fn next_focus(&mut self) {
        self.focus_index = (self.focus_index + 1) % FOCUS_COUNT;
    }

    pub fn prev_focus(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = FOCUS_COUNT - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == field) {
            self.focus_index = index;
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
