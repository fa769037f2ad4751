//! Validation rule table for the contact form
//!
//! Required applies to full name, email, and phone number. Format applies
//! to email (simple `local@domain` syntax) and phone number (optionally
//! signed integer, no leading zero unless the value is exactly "0").
//! Description carries no rule. Errors are derived from current values on
//! every query; nothing here caches.

use std::sync::LazyLock;

use regex::Regex;

use crate::fields::{Field, FormFields};

/// Why a field is currently invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is required and empty
    Required,
    /// The field has a value that does not match its format rule
    Format,
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*$").unwrap()
});

// The pattern itself accepts the empty string; emptiness is the required
// rule's job, as in the original form definition.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(0|[1-9]\d*)?$").unwrap()
});

impl FormFields {
    /// Current error for one field, if any
    ///
    /// Required is reported before format, so an empty email reports
    /// `Required`, never `Format`.
    pub fn field_error(&self, field: Field) -> Option<ValidationError> {
        let value = self.value(field);
        match field {
            Field::FullName => value.is_empty().then_some(ValidationError::Required),
            Field::Email => {
                if value.is_empty() {
                    Some(ValidationError::Required)
                } else if !EMAIL_REGEX.is_match(value) {
                    Some(ValidationError::Format)
                } else {
                    None
                }
            }
            Field::PhoneNumber => {
                if value.is_empty() {
                    Some(ValidationError::Required)
                } else if !PHONE_REGEX.is_match(value) {
                    Some(ValidationError::Format)
                } else {
                    None
                }
            }
            Field::Description => None,
        }
    }

    /// All current errors, in field order
    pub fn errors(&self) -> Vec<(Field, ValidationError)> {
        [Field::FullName, Field::Email, Field::PhoneNumber, Field::Description]
            .into_iter()
            .filter_map(|field| self.field_error(field).map(|error| (field, error)))
            .collect()
    }

    /// Whether every field passes its rules
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            full_name: "Ana Diaz".into(),
            email: "ana@mail.com".into(),
            phone_number: "5551234".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(valid_fields().is_valid());
        assert!(valid_fields().errors().is_empty());
    }

    #[test]
    fn test_empty_full_name_is_required() {
        let mut fields = valid_fields();
        fields.full_name.clear();
        assert!(!fields.is_valid());
        assert_eq!(fields.field_error(Field::FullName), Some(ValidationError::Required));
    }

    #[test]
    fn test_malformed_email_is_format_not_required() {
        let mut fields = valid_fields();
        fields.email = "not-an-email".into();
        assert_eq!(fields.field_error(Field::Email), Some(ValidationError::Format));

        fields.email.clear();
        assert_eq!(fields.field_error(Field::Email), Some(ValidationError::Required));
    }

    #[test]
    fn test_email_variants() {
        let mut fields = valid_fields();
        for good in ["a@b", "ana@mail.com", "first.last+tag@sub.domain.org"] {
            fields.email = good.into();
            assert_eq!(fields.field_error(Field::Email), None, "{good}");
        }
        for bad in ["a@", "@b", "a@b@c", "a b@c", "a@b c"] {
            fields.email = bad.into();
            assert_eq!(fields.field_error(Field::Email), Some(ValidationError::Format), "{bad}");
        }
    }

    #[test]
    fn test_phone_pattern() {
        let mut fields = valid_fields();
        for good in ["0", "1", "5551234", "-42"] {
            fields.phone_number = good.into();
            assert_eq!(fields.field_error(Field::PhoneNumber), None, "{good}");
        }
        for bad in ["01", "1a", "+1", "1 2", "00"] {
            fields.phone_number = bad.into();
            assert_eq!(
                fields.field_error(Field::PhoneNumber),
                Some(ValidationError::Format),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_empty_phone_is_required() {
        let mut fields = valid_fields();
        fields.phone_number.clear();
        assert_eq!(fields.field_error(Field::PhoneNumber), Some(ValidationError::Required));
    }

    #[test]
    fn test_description_never_errors() {
        let mut fields = valid_fields();
        fields.description = "anything // at all".into();
        assert_eq!(fields.field_error(Field::Description), None);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut fields = valid_fields();
        fields.email = "broken".into();
        assert_eq!(fields.errors(), fields.errors());
        assert_eq!(fields.is_valid(), fields.is_valid());
    }
}
