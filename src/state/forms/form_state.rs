//! Form session state and edit/submit transitions

use super::field::{
    utf16_len, EditEvent, FieldName, FieldValues, PhoneType, RawValue, StaffRole, BIO_MAX_CHARS,
};
use super::submission::{build, SubmissionRecord};
use super::validator::{validate, ValidationErrors};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Observable phase of a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No outstanding errors are shown
    Editing,
    /// A submit failed and at least one field still fails its rule
    EditingWithErrors,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were valid; the session has been reset
    Submitted(SubmissionRecord),
    /// Values were kept so the user can correct them
    Rejected(ValidationErrors),
}

/// Values, last computed errors, and the submitted-once flag of one form
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    values: FieldValues,
    errors: ValidationErrors,
    submitted_once: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn submitted_once(&self) -> bool {
        self.submitted_once
    }

    pub fn phase(&self) -> SessionPhase {
        if self.submitted_once && !self.errors.is_empty() {
            SessionPhase::EditingWithErrors
        } else {
            SessionPhase::Editing
        }
    }

    /// Characters left before the bio cap; negative only for values that
    /// bypassed `apply`
    pub fn bio_characters_remaining(&self) -> isize {
        BIO_MAX_CHARS as isize - self.values.bio_len() as isize
    }

    /// True while every field still holds its default
    pub fn is_pristine(&self) -> bool {
        self.values == FieldValues::default()
    }

    /// Apply one edit and, once a submit has been attempted, revalidate
    /// against the post-edit values.
    pub fn apply(&mut self, edit: EditEvent) -> &FieldValues {
        let Some(field) = FieldName::parse(&edit.field) else {
            debug!(field = %edit.field, "Ignoring edit for unknown field");
            return &self.values;
        };

        if !write_field(&mut self.values, field, edit.value) {
            debug!(%field, "Edit rejected");
        }

        if self.submitted_once {
            self.errors = validate(&self.values);
        }

        &self.values
    }

    /// Submit using the current wall clock
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Utc::now())
    }

    /// Submit with an explicit timestamp for the record
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> SubmitOutcome {
        self.submitted_once = true;
        let errors = validate(&self.values);

        if !errors.is_empty() {
            debug!(count = errors.len(), "Submit rejected");
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        let record = build(&self.values, now);
        self.reset();
        info!(submitted_on = %record.submitted_on_iso(), "Registration accepted");
        SubmitOutcome::Submitted(record)
    }

    /// Return to the freshly mounted state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Write a raw value into `values`. Returns false when the edit was refused.
fn write_field(values: &mut FieldValues, field: FieldName, raw: RawValue) -> bool {
    match field {
        FieldName::EmailNotifications => {
            values.email_notifications = raw.as_flag();
            true
        }
        FieldName::Bio => {
            let text = raw.into_text();
            if utf16_len(&text) > BIO_MAX_CHARS {
                return false;
            }
            values.bio = text;
            true
        }
        FieldName::PhoneType => match PhoneType::parse(&raw.into_text()) {
            Some(choice) => {
                values.phone_type = choice;
                true
            }
            None => false,
        },
        FieldName::Staff => match StaffRole::parse(&raw.into_text()) {
            Some(choice) => {
                values.staff = choice;
                true
            }
            None => false,
        },
        FieldName::Name => {
            values.name = raw.into_text();
            true
        }
        FieldName::Email => {
            values.email = raw.into_text();
            true
        }
        FieldName::Phone => {
            values.phone = raw.into_text();
            true
        }
    }
}
