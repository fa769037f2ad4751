//! ck-form: contact create/edit form controller
//!
//! Owns form state, the validation rule table, create/edit mode
//! detection, submit handling, and load-for-edit sequencing. Talks to
//! its host through the seams in `ck-core`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ck_core::{InMemoryContactStore, RecordingNavigator};
//! use ck_form::{ContactFormController, EditTarget};
//!
//! let store = Arc::new(InMemoryContactStore::new());
//! let navigator = Arc::new(RecordingNavigator::new());
//! let controller = ContactFormController::new(store, navigator);
//!
//! // Edit mode: populate from an existing record, out-of-band.
//! let populate = controller
//!     .set_edit_target(EditTarget::from_route_param("42"))
//!     .await;
//!
//! controller.set_full_name("Ana Diaz").await;
//! let outcome = controller.submit().await;
//! ```

pub mod config;
pub mod controller;
pub mod fields;
pub mod validation;

pub use config::FormConfig;
pub use controller::{ContactFormController, EditTarget, PopulateOutcome, SubmitOutcome};
pub use fields::{Field, FormFields};
pub use validation::ValidationError;
