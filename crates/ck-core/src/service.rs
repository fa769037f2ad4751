//! Collaborator traits consumed by the form controller
//!
//! The controller never talks to a concrete backend, router, or toast UI.
//! It goes through these seams, so a host can plug in an HTTP client, an
//! app router, or a notification surface without touching form logic.

use async_trait::async_trait;

use crate::models::{ContactForm, ContactRecord};
use crate::Result;

/// Contacts data-access capability
///
/// Implementations are expected to be shared across tasks, so every
/// method takes `&self`.
#[async_trait]
pub trait ContactsService: Send + Sync {
    /// Fetch a contact by id
    ///
    /// Returns `Ok(None)` when the id is unknown; `Err` is reserved for
    /// transport or server failure.
    async fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>>;

    /// Create a new contact from a submitted form
    async fn create_contact(&self, form: &ContactForm) -> Result<ContactRecord>;

    /// Update an existing contact with a submitted form
    async fn update_contact(&self, id: &str, form: &ContactForm) -> Result<ContactRecord>;
}

/// Navigation capability, fire-and-forget
pub trait Navigator: Send + Sync {
    /// Navigate the host view to the given path
    fn navigate_to(&self, path: &str);
}

/// Error-surfacing capability for submission failures
///
/// The original design left a "call some toast service" placeholder;
/// this is that placeholder as a real seam.
pub trait Notifier: Send + Sync {
    /// Surface a non-fatal error to the user
    fn notify_error(&self, message: &str);
}

/// Notifier that forwards errors to the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Navigator that records every navigation, for hosts and tests that
/// only need to observe where the controller went
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: std::sync::Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths navigated to, in order
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::debug!("navigating to {path}");
        self.paths.lock().unwrap().push(path.to_string());
    }
}
