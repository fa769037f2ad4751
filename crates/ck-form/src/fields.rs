//! Form field state
//!
//! The raw values behind the four controlled inputs. Validation lives in
//! [`crate::validation`]; this module only holds and moves values.

use ck_core::{ContactForm, ContactRecord};

/// The four controlled fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Description,
}

/// Raw field values, all-empty until edited or populated
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub description: String,
}

impl FormFields {
    /// Create all-empty fields (create-mode defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite all four values from a fetched record at once
    ///
    /// Callers hold the form lock across this call, so a partial
    /// overwrite is never observable.
    pub fn populate_from(&mut self, record: &ContactRecord) {
        self.full_name = record.full_name.clone();
        self.email = record.email.clone();
        self.phone_number = record.phone_number.clone();
        self.description = record.description.clone().unwrap_or_default();
    }

    /// Project the current values into the submitted form value
    ///
    /// An empty description maps to `None`, matching the optional field
    /// on [`ContactForm`].
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        }
    }

    /// Read a single field value
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Description => &self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let fields = FormFields::new();
        assert!(fields.full_name.is_empty());
        assert!(fields.to_form().description.is_none());
    }

    #[test]
    fn test_populate_overwrites_everything() {
        let mut fields = FormFields {
            full_name: "stale".into(),
            email: "stale@mail.com".into(),
            phone_number: "99".into(),
            description: "stale".into(),
        };
        let record = ContactRecord::from_form(
            "42",
            &ContactForm::new("Bob").with_email("bob@mail.com").with_phone_number("1"),
        );
        fields.populate_from(&record);

        assert_eq!(fields.full_name, "Bob");
        assert_eq!(fields.email, "bob@mail.com");
        assert_eq!(fields.phone_number, "1");
        assert!(fields.description.is_empty());
    }

    #[test]
    fn test_to_form_keeps_description_when_set() {
        let mut fields = FormFields::new();
        fields.description = "a note".into();
        assert_eq!(fields.to_form().description.as_deref(), Some("a note"));
    }
}
