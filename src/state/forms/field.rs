//! Form field value objects

use serde::Serialize;
use std::fmt;

/// Maximum bio length, counted in UTF-16 code units
pub const BIO_MAX_CHARS: usize = 280;

/// Length of a string in UTF-16 code units
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Identifies one field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    PhoneType,
    Staff,
    Bio,
    EmailNotifications,
}

/// How a field interprets the raw value of an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Choice,
    Flag,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::PhoneType,
        FieldName::Staff,
        FieldName::Bio,
        FieldName::EmailNotifications,
    ];

    /// Resolve the wire name used by edit events.
    ///
    /// `emailNotificationSignup` is accepted as an alias of
    /// `emailNotifications` because that is the name the checkbox widget
    /// carries in the markup.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FieldName::Name),
            "email" => Some(FieldName::Email),
            "phone" => Some(FieldName::Phone),
            "phoneType" => Some(FieldName::PhoneType),
            "staff" => Some(FieldName::Staff),
            "bio" => Some(FieldName::Bio),
            "emailNotifications" | "emailNotificationSignup" => {
                Some(FieldName::EmailNotifications)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::PhoneType => "phoneType",
            FieldName::Staff => "staff",
            FieldName::Bio => "bio",
            FieldName::EmailNotifications => "emailNotifications",
        }
    }

    /// Human readable label shown next to the widget
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::PhoneType => "PhoneType",
            FieldName::Staff => "Staff",
            FieldName::Bio => "Bio",
            FieldName::EmailNotifications => "Sign up for email notifications",
        }
    }

    /// Identifier a rendering layer attaches to the field's error message
    pub fn error_id(&self) -> String {
        format!("{}-error", self.as_str())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            FieldName::PhoneType | FieldName::Staff => ValueKind::Choice,
            FieldName::EmailNotifications => ValueKind::Flag,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone type selection. `Unset` is the placeholder state of the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PhoneType {
    #[default]
    #[serde(rename = "")]
    Unset,
    Home,
    Mobile,
    Work,
}

impl PhoneType {
    /// Selectable options, in the order the select lists them
    pub const OPTIONS: [PhoneType; 3] = [PhoneType::Mobile, PhoneType::Work, PhoneType::Home];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(PhoneType::Unset),
            "Home" => Some(PhoneType::Home),
            "Mobile" => Some(PhoneType::Mobile),
            "Work" => Some(PhoneType::Work),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Unset => "",
            PhoneType::Home => "Home",
            PhoneType::Mobile => "Mobile",
            PhoneType::Work => "Work",
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, PhoneType::Unset)
    }

    /// Next option in list order (wraps around, placeholder is never re-entered)
    pub fn next_option(&self) -> Self {
        cycle(&Self::OPTIONS, *self, 1)
    }

    /// Previous option in list order
    pub fn prev_option(&self) -> Self {
        cycle(&Self::OPTIONS, *self, Self::OPTIONS.len() - 1)
    }
}

/// Role radio selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StaffRole {
    #[default]
    #[serde(rename = "")]
    Unset,
    Instructor,
    Student,
}

impl StaffRole {
    pub const OPTIONS: [StaffRole; 2] = [StaffRole::Instructor, StaffRole::Student];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(StaffRole::Unset),
            "Instructor" => Some(StaffRole::Instructor),
            "Student" => Some(StaffRole::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Unset => "",
            StaffRole::Instructor => "Instructor",
            StaffRole::Student => "Student",
        }
    }

    pub fn next_option(&self) -> Self {
        cycle(&Self::OPTIONS, *self, 1)
    }

    pub fn prev_option(&self) -> Self {
        cycle(&Self::OPTIONS, *self, Self::OPTIONS.len() - 1)
    }
}

/// Step through `options` by `step`; a value outside the list lands on the first option.
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: usize) -> T {
    match options.iter().position(|o| *o == current) {
        Some(index) => options[(index + step) % options.len()],
        None => options[0],
    }
}

/// Current values of every registration field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub phone_type: PhoneType,
    pub staff: StaffRole,
    pub bio: String,
    pub email_notifications: bool,
}

impl FieldValues {
    /// Bio length in UTF-16 code units
    pub fn bio_len(&self) -> usize {
        utf16_len(&self.bio)
    }

    /// Text content of a string-backed field, `None` for choices and flags
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Email => Some(&self.email),
            FieldName::Phone => Some(&self.phone),
            FieldName::Bio => Some(&self.bio),
            FieldName::PhoneType | FieldName::Staff | FieldName::EmailNotifications => None,
        }
    }

    /// Whether a field accepts input from the form. The phone type select
    /// stays disabled until a phone number has been entered.
    pub fn is_enabled(&self, field: FieldName) -> bool {
        match field {
            FieldName::PhoneType => !self.phone.is_empty(),
            _ => true,
        }
    }
}

/// Raw value carried by an inbound edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Text(String),
    Flag(bool),
}

impl RawValue {
    /// Interpret as a checkbox state; `"on"` is what an unvalued checkbox submits
    pub fn as_flag(&self) -> bool {
        match self {
            RawValue::Flag(checked) => *checked,
            RawValue::Text(s) => matches!(s.as_str(), "true" | "on"),
        }
    }

    /// Interpret as a string value
    pub fn into_text(self) -> String {
        match self {
            RawValue::Text(s) => s,
            RawValue::Flag(checked) => checked.to_string(),
        }
    }
}

/// Widget-independent edit event, produced by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    pub field: String,
    pub value: RawValue,
}

impl EditEvent {
    pub fn text(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: RawValue::Text(value.into()),
        }
    }

    pub fn flag(field: impl Into<String>, checked: bool) -> Self {
        Self {
            field: field.into(),
            value: RawValue::Flag(checked),
        }
    }
}
