//! In-memory contacts service
//!
//! Backs hosts that have no real backend wired up yet, and every
//! controller test. Fault injection via [`InMemoryContactStore::fail_next`]
//! covers the failure paths.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{ContactForm, ContactRecord};
use crate::service::ContactsService;
use crate::{Error, Result};

/// In-memory contact store keyed by contact id
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: Arc<RwLock<HashMap<String, ContactRecord>>>,
    fail_next: Arc<RwLock<Option<String>>>,
}

impl InMemoryContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing record
    pub async fn insert(&self, record: ContactRecord) {
        let mut contacts = self.contacts.write().await;
        contacts.insert(record.id.clone(), record);
    }

    /// Make the next service call fail with the given message
    pub async fn fail_next(&self, message: impl Into<String>) {
        let mut fail = self.fail_next.write().await;
        *fail = Some(message.into());
    }

    /// Number of stored contacts
    pub async fn contact_count(&self) -> usize {
        let contacts = self.contacts.read().await;
        contacts.len()
    }

    async fn take_fault(&self) -> Option<String> {
        let mut fail = self.fail_next.write().await;
        fail.take()
    }
}

#[async_trait]
impl ContactsService for InMemoryContactStore {
    async fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>> {
        if let Some(message) = self.take_fault().await {
            return Err(Error::Service(message));
        }
        let contacts = self.contacts.read().await;
        Ok(contacts.get(id).cloned())
    }

    async fn create_contact(&self, form: &ContactForm) -> Result<ContactRecord> {
        if let Some(message) = self.take_fault().await {
            return Err(Error::CreateError(message));
        }
        let record = ContactRecord::from_form(uuid::Uuid::new_v4().to_string(), form);
        debug!("created contact {}", record.id);

        let mut contacts = self.contacts.write().await;
        contacts.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_contact(&self, id: &str, form: &ContactForm) -> Result<ContactRecord> {
        if let Some(message) = self.take_fault().await {
            return Err(Error::UpdateError(message));
        }
        let mut contacts = self.contacts.write().await;
        let existing = contacts
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let mut record = ContactRecord::from_form(id, form);
        record.created_at = existing.created_at;
        debug!("updated contact {id}");

        contacts.insert(id.to_string(), record.clone());
        Ok(record)
    }
}

impl Clone for InMemoryContactStore {
    fn clone(&self) -> Self {
        Self {
            contacts: Arc::clone(&self.contacts),
            fail_next: Arc::clone(&self.fail_next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryContactStore::new();
        let form = ContactForm::new("Ana Diaz")
            .with_email("ana@mail.com")
            .with_phone_number("5551234");

        let record = store.create_contact(&form).await.unwrap();
        let fetched = store.get_contact(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched.full_name, "Ana Diaz");
        assert_eq!(store.contact_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryContactStore::new();
        assert!(store.get_contact("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let store = InMemoryContactStore::new();
        let form = ContactForm::new("Bob").with_email("bob@mail.com").with_phone_number("1");
        let record = store.create_contact(&form).await.unwrap();

        let updated = store
            .update_contact(&record.id, &form.clone().with_description("x"))
            .await
            .unwrap();
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(updated.description.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let store = InMemoryContactStore::new();
        let form = ContactForm::new("Bob").with_email("bob@mail.com").with_phone_number("1");
        let err = store.update_contact("missing", &form).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_fail_next_hits_one_call() {
        let store = InMemoryContactStore::new();
        store.fail_next("backend down").await;

        let form = ContactForm::new("Bob").with_email("bob@mail.com").with_phone_number("1");
        assert!(store.create_contact(&form).await.is_err());
        assert!(store.create_contact(&form).await.is_ok());
    }
}
