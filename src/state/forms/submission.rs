//! Normalized submission record built from a validated form

use super::field::{FieldValues, PhoneType, StaffRole};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Terminal artifact of one form cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    name: String,
    email: String,
    phone: String,
    phone_type: PhoneType,
    staff: StaffRole,
    bio: String,
    email_notifications: bool,
    #[serde(serialize_with = "serialize_instant")]
    submitted_on: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn phone_type(&self) -> PhoneType {
        self.phone_type
    }

    pub fn staff(&self) -> StaffRole {
        self.staff
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn email_notifications(&self) -> bool {
        self.email_notifications
    }

    pub fn submitted_on(&self) -> DateTime<Utc> {
        self.submitted_on
    }

    /// `submitted_on` as an ISO-8601 instant with millisecond precision
    pub fn submitted_on_iso(&self) -> String {
        self.submitted_on.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn serialize_instant<S: Serializer>(instant: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Build the record for values that already passed validation.
///
/// A phone type left over from a cleared phone number is dropped.
pub fn build(values: &FieldValues, now: DateTime<Utc>) -> SubmissionRecord {
    let phone_type = if values.phone.is_empty() {
        PhoneType::Unset
    } else {
        values.phone_type
    };

    SubmissionRecord {
        name: values.name.clone(),
        email: values.email.clone(),
        phone: values.phone.clone(),
        phone_type,
        staff: values.staff,
        bio: values.bio.clone(),
        email_notifications: values.email_notifications,
        submitted_on: now,
    }
}
