//! ck-core: shared kinds for the contacts form workspace
//!
//! This crate holds the contact data models, the error taxonomy, the
//! collaborator seams the form controller talks through (contacts
//! service, navigator, notifier), and an in-memory contacts service
//! for hosts and tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ck_core::{ContactForm, ContactsService, InMemoryContactStore};
//!
//! let store = InMemoryContactStore::new();
//! let form = ContactForm::new("John Doe")
//!     .with_email("john@example.com")
//!     .with_phone_number("1234567890");
//! let record = store.create_contact(&form).await?;
//! ```

pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use models::{ContactForm, ContactRecord};
pub use service::{ContactsService, Navigator, Notifier, RecordingNavigator, TracingNotifier};
pub use store::InMemoryContactStore;
