//! Data models shared between the form controller and contact services

use serde::{Deserialize, Serialize};

/// The validated value object sent to create/update operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactForm {
    /// Full name (required)
    pub full_name: String,
    /// Email address (required, `local@domain.tld`)
    pub email: String,
    /// Phone number (required, digits with optional leading `-`)
    pub phone_number: String,
    /// Free-form description (optional)
    #[serde(default)]
    pub description: Option<String>,
}

impl ContactForm {
    /// Create a form with a name
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Set email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A contact as stored by a contacts service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Server-assigned identifier
    pub id: String,
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone_number: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update time
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ContactRecord {
    /// Build a record from a submitted form
    pub fn from_form(id: impl Into<String>, form: &ContactForm) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: id.into(),
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone_number: form.phone_number.clone(),
            description: form.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Project the record back into its form value
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_builder() {
        let form = ContactForm::new("Ana Diaz")
            .with_email("ana@mail.com")
            .with_phone_number("5551234");
        assert_eq!(form.full_name, "Ana Diaz");
        assert_eq!(form.email, "ana@mail.com");
        assert!(form.description.is_none());
    }

    #[test]
    fn test_record_round_trip() {
        let form = ContactForm::new("Bob")
            .with_email("bob@mail.com")
            .with_phone_number("1")
            .with_description("x");
        let record = ContactRecord::from_form("42", &form);
        assert_eq!(record.id, "42");
        assert_eq!(record.to_form(), form);
    }

    #[test]
    fn test_form_deserialize_without_description() {
        let form: ContactForm = serde_json::from_str(
            r#"{"full_name":"Bob","email":"bob@mail.com","phone_number":"1"}"#,
        )
        .unwrap();
        assert!(form.description.is_none());
    }
}
