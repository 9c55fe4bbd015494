//! Field-level validation rules for the registration form

use super::field::{FieldName, FieldValues, BIO_MAX_CHARS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PHONE_INVALID: &str = "Invalid Phone number. Phone number must be 10 digits";
pub const PHONE_TYPE_REQUIRED: &str = "A phone type is required when a phone number is entered";
pub const BIO_TOO_LONG: &str = "Bio cannot exceed 280 characters";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\([0-9]{3}\)|[0-9]{3})[ -]?[0-9]{3}[ -]?[0-9]{4}$")
        .expect("phone pattern compiles")
});

/// Field to message mapping. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: FieldName, message: &str) {
        self.messages.insert(field, message.to_string());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.messages.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Empty once whitespace and byte-order marks are stripped from both ends
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Validate a snapshot of the form.
///
/// Each rule looks at one field (phone type also reads phone) and produces
/// at most one message for it, so rule order never changes the result.
pub fn validate(values: &FieldValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(&values.name) {
        errors.insert(FieldName::Name, NAME_REQUIRED);
    }

    if is_blank(&values.email) {
        errors.insert(FieldName::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&values.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }

    if !values.phone.is_empty() {
        if !PHONE_PATTERN.is_match(&values.phone) {
            errors.insert(FieldName::Phone, PHONE_INVALID);
        }
        if values.phone_type.is_unset() {
            errors.insert(FieldName::PhoneType, PHONE_TYPE_REQUIRED);
        }
    }

    if values.bio_len() > BIO_MAX_CHARS {
        errors.insert(FieldName::Bio, BIO_TOO_LONG);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{PhoneType, StaffRole};

    fn valid_values() -> FieldValues {
        FieldValues {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            ..Default::default()
        }
    }

    fn with_phone(phone: &str) -> FieldValues {
        FieldValues {
            phone: phone.to_string(),
            phone_type: PhoneType::Mobile,
            ..valid_values()
        }
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_is_required() {
            let values = FieldValues {
                name: String::new(),
                ..valid_values()
            };
            assert_eq!(validate(&values).get(FieldName::Name), Some(NAME_REQUIRED));
        }

        #[test]
        fn test_whitespace_name_is_required() {
            let values = FieldValues {
                name: " \t ".to_string(),
                ..valid_values()
            };
            assert_eq!(validate(&values).get(FieldName::Name), Some(NAME_REQUIRED));
        }

        #[test]
        fn test_byte_order_mark_name_is_required() {
            let values = FieldValues {
                name: "\u{FEFF} \u{FEFF}".to_string(),
                ..valid_values()
            };
            assert_eq!(validate(&values).get(FieldName::Name), Some(NAME_REQUIRED));
        }

        #[test]
        fn test_padded_name_is_accepted() {
            let values = FieldValues {
                name: "  Bo ".to_string(),
                ..valid_values()
            };
            assert!(!validate(&values).contains(FieldName::Name));
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        fn email_error(email: &str) -> Option<String> {
            let values = FieldValues {
                email: email.to_string(),
                ..valid_values()
            };
            validate(&values).get(FieldName::Email).map(str::to_string)
        }

        #[test]
        fn test_blank_email_is_required() {
            assert_eq!(email_error("").as_deref(), Some(EMAIL_REQUIRED));
            assert_eq!(email_error("   ").as_deref(), Some(EMAIL_REQUIRED));
            assert_eq!(email_error("\u{FEFF}").as_deref(), Some(EMAIL_REQUIRED));
        }

        #[test]
        fn test_malformed_email() {
            for email in ["bad-email", "a@b", "@x.com", "a@.com", "a b@x.com", "a@@x.com"] {
                assert_eq!(email_error(email).as_deref(), Some(EMAIL_INVALID), "{email}");
            }
        }

        #[test]
        fn test_surrounding_whitespace_is_not_trimmed_for_format() {
            assert_eq!(email_error(" ada@x.com").as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_well_formed_email() {
            for email in ["ada@x.com", "a.b+c@mail.example.org", "x@y.z"] {
                assert_eq!(email_error(email), None, "{email}");
            }
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepted_formats() {
            for phone in [
                "1234567890",
                "123-456-7890",
                "123 456 7890",
                "(123) 456-7890",
                "(123)4567890",
                "123456-7890",
                "123-4567890",
            ] {
                assert!(!validate(&with_phone(phone)).contains(FieldName::Phone), "{phone}");
            }
        }

        #[test]
        fn test_rejected_formats() {
            for phone in [
                "555-1234",
                "123--456-7890",
                "(123 456-7890",
                "123.456.7890",
                "12345678901",
                "abc-def-ghij",
                " 1234567890",
            ] {
                assert_eq!(
                    validate(&with_phone(phone)).get(FieldName::Phone),
                    Some(PHONE_INVALID),
                    "{phone}"
                );
            }
        }

        #[test]
        fn test_non_ascii_digits_rejected() {
            assert!(validate(&with_phone("١٢٣٤٥٦٧٨٩٠")).contains(FieldName::Phone));
        }

        #[test]
        fn test_empty_phone_is_valid_without_type() {
            let errors = validate(&valid_values());
            assert!(!errors.contains(FieldName::Phone));
            assert!(!errors.contains(FieldName::PhoneType));
        }
    }

    mod phone_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_when_phone_entered() {
            let values = FieldValues {
                phone: "1234567890".to_string(),
                ..valid_values()
            };
            assert_eq!(
                validate(&values).get(FieldName::PhoneType),
                Some(PHONE_TYPE_REQUIRED)
            );
        }

        #[test]
        fn test_required_even_when_phone_malformed() {
            let values = FieldValues {
                phone: "12".to_string(),
                ..valid_values()
            };
            let errors = validate(&values);
            assert!(errors.contains(FieldName::Phone));
            assert!(errors.contains(FieldName::PhoneType));
        }

        #[test]
        fn test_stale_type_without_phone_is_fine() {
            let values = FieldValues {
                phone_type: PhoneType::Work,
                ..valid_values()
            };
            assert!(validate(&values).is_empty());
        }
    }

    mod bio {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_at_limit_is_valid() {
            let values = FieldValues {
                bio: "x".repeat(BIO_MAX_CHARS),
                ..valid_values()
            };
            assert!(validate(&values).is_empty());
        }

        #[test]
        fn test_over_limit() {
            let values = FieldValues {
                bio: "x".repeat(BIO_MAX_CHARS + 1),
                ..valid_values()
            };
            assert_eq!(validate(&values).get(FieldName::Bio), Some(BIO_TOO_LONG));
        }

        #[test]
        fn test_limit_counts_utf16_units() {
            // 140 astral characters occupy 280 code units
            let values = FieldValues {
                bio: "😀".repeat(140),
                ..valid_values()
            };
            assert!(validate(&values).is_empty());

            let values = FieldValues {
                bio: format!("{}a", "😀".repeat(140)),
                ..valid_values()
            };
            assert!(validate(&values).contains(FieldName::Bio));
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scenario_a_all_valid() {
            let values = FieldValues {
                name: "Ada".to_string(),
                email: "ada@x.com".to_string(),
                phone: String::new(),
                phone_type: PhoneType::Unset,
                staff: StaffRole::Student,
                bio: "hi".to_string(),
                email_notifications: true,
            };
            assert_eq!(validate(&values), ValidationErrors::new());
        }

        #[test]
        fn test_scenario_b_multiple_failures() {
            let values = FieldValues {
                name: String::new(),
                email: "bad-email".to_string(),
                phone: "555-1234".to_string(),
                phone_type: PhoneType::Unset,
                bio: String::new(),
                ..Default::default()
            };
            let errors = validate(&values);
            let collected: Vec<(FieldName, &str)> = errors.iter().collect();
            assert_eq!(
                collected,
                vec![
                    (FieldName::Name, NAME_REQUIRED),
                    (FieldName::Email, EMAIL_INVALID),
                    (FieldName::Phone, PHONE_INVALID),
                    (FieldName::PhoneType, PHONE_TYPE_REQUIRED),
                ]
            );
        }

        #[test]
        fn test_scenario_c_only_bio() {
            let values = FieldValues {
                name: "Bo".to_string(),
                email: "b@x.com".to_string(),
                phone: "(123) 456-7890".to_string(),
                phone_type: PhoneType::Home,
                bio: "x".repeat(281),
                ..Default::default()
            };
            let errors = validate(&values);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::Bio), Some(BIO_TOO_LONG));
        }
    }

    #[test]
    fn test_validate_is_pure() {
        let values = FieldValues {
            email: "nope".to_string(),
            phone: "1".to_string(),
            ..Default::default()
        };
        let snapshot = values.clone();
        let first = validate(&values);
        let second = validate(&values);
        assert_eq!(first, second);
        assert_eq!(values, snapshot);
    }

    #[test]
    fn test_unruled_fields_never_flagged() {
        let values = FieldValues {
            staff: StaffRole::Unset,
            email_notifications: true,
            ..Default::default()
        };
        let errors = validate(&values);
        assert!(!errors.contains(FieldName::Staff));
        assert!(!errors.contains(FieldName::EmailNotifications));
    }
}
