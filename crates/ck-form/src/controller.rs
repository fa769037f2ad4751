//! Contact create/edit form controller
//!
//! Mediates between raw user input and the contacts service: decides
//! create vs. edit from the [`EditTarget`], validates before submission,
//! and never leaves the form partially populated after a failed load.
//!
//! The controller is cheap to clone; clones share the same form state,
//! so a populate task spawned from one clone is visible through all of
//! them. A populate started before the controller's last clone is
//! dropped resolves harmlessly against the shared state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ck_core::{ContactRecord, ContactsService, Error, Navigator, Notifier, TracingNotifier};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::fields::{Field, FormFields};
use crate::validation::ValidationError;

/// Which record, if any, the form is editing
///
/// An explicit two-variant type rather than an empty-string sentinel, so
/// "no id" and "empty id" cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditTarget {
    /// No existing record targeted; submit creates
    #[default]
    Create,
    /// An existing record's id; submit updates it
    Edit(String),
}

impl EditTarget {
    /// Build from a route-parameter style string; empty means create
    pub fn from_route_param(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Create
        } else {
            Self::Edit(value)
        }
    }

    /// The targeted id, if in edit mode
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    /// Whether submission will update rather than create
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

impl From<Option<String>> for EditTarget {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(id) => Self::from_route_param(id),
            None => Self::Create,
        }
    }
}

/// Result of a load-for-edit sequence
///
/// "Not found" and "failed" are distinct on purpose: a host can show a
/// missing-contact message for one and an error toast for the other.
#[derive(Debug)]
pub enum PopulateOutcome {
    /// All four fields now hold the fetched record's values
    Populated(ContactRecord),
    /// The service knows no such id; the form was left untouched
    NotFound,
    /// A newer edit target arrived while this fetch was in flight;
    /// the result was discarded
    Superseded,
    /// The fetch failed; the form was left untouched
    Failed(Error),
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The service accepted the form and the host was navigated away
    Saved(ContactRecord),
    /// Validation failed; no service call was made
    Invalid(Vec<(Field, ValidationError)>),
    /// The service call failed; no navigation happened
    Failed(Error),
}

/// The contact create/edit form controller
pub struct ContactFormController {
    service: Arc<dyn ContactsService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    config: FormConfig,
    fields: Arc<RwLock<FormFields>>,
    target: Arc<RwLock<EditTarget>>,
    generation: Arc<AtomicU64>,
}

impl ContactFormController {
    /// Create a controller in create mode with all-empty fields
    ///
    /// Submission failures are logged through [`TracingNotifier`] unless
    /// [`with_notifier`](Self::with_notifier) installs another surface.
    pub fn new(service: Arc<dyn ContactsService>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            service,
            navigator,
            notifier: Arc::new(TracingNotifier),
            config: FormConfig::default(),
            fields: Arc::new(RwLock::new(FormFields::new())),
            target: Arc::new(RwLock::new(EditTarget::Create)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Install an error-surfacing collaborator
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Override the controller configuration
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the edit target, re-triggering the populate sequence
    ///
    /// For [`EditTarget::Edit`], the fetch runs on a spawned task; the
    /// returned handle carries the [`PopulateOutcome`] and may be awaited
    /// or dropped. Each call bumps the populate generation, so when calls
    /// overlap only the latest one's result is applied.
    pub async fn set_edit_target(&self, target: EditTarget) -> Option<JoinHandle<PopulateOutcome>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut current = self.target.write().await;
            *current = target.clone();
        }

        match target {
            EditTarget::Create => None,
            EditTarget::Edit(id) => {
                debug!("loading contact {id} for edit");
                let controller = self.clone();
                Some(tokio::spawn(async move {
                    controller.fetch_and_populate(&id, generation).await
                }))
            }
        }
    }

    async fn fetch_and_populate(&self, id: &str, generation: u64) -> PopulateOutcome {
        match self.service.get_contact(id).await {
            Ok(Some(record)) => {
                let mut fields = self.fields.write().await;
                if self.generation.load(Ordering::SeqCst) != generation {
                    debug!("discarding stale populate for contact {id}");
                    return PopulateOutcome::Superseded;
                }
                fields.populate_from(&record);
                debug!("populated form from contact {id}");
                PopulateOutcome::Populated(record)
            }
            Ok(None) => {
                debug!("contact {id} not found, form left untouched");
                PopulateOutcome::NotFound
            }
            Err(e) => {
                warn!("failed to load contact {id}: {e}");
                PopulateOutcome::Failed(e)
            }
        }
    }

    /// Validate the current fields and submit to the contacts service
    ///
    /// An invalid form short-circuits with no service call and no
    /// navigation. A service failure is caught, logged, forwarded to the
    /// notifier, and returned as a value; it never propagates.
    pub async fn submit(&self) -> SubmitOutcome {
        let snapshot = self.fields.read().await.clone();
        let errors = snapshot.errors();
        if !errors.is_empty() {
            debug!("submit blocked by {} validation error(s)", errors.len());
            return SubmitOutcome::Invalid(errors);
        }

        let form = snapshot.to_form();
        let target = self.target.read().await.clone();
        let result = match &target {
            EditTarget::Create => self.service.create_contact(&form).await,
            EditTarget::Edit(id) => self.service.update_contact(id, &form).await,
        };

        match result {
            Ok(record) => {
                info!("saved contact {}", record.id);
                self.navigator.navigate_to(&self.config.dashboard_path);
                SubmitOutcome::Saved(record)
            }
            Err(e) => {
                warn!("submit failed: {e}");
                self.notifier.notify_error(&e.to_string());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Current edit target
    pub async fn edit_target(&self) -> EditTarget {
        self.target.read().await.clone()
    }

    /// Whether submission will update rather than create
    pub async fn is_edit(&self) -> bool {
        self.target.read().await.is_edit()
    }

    /// Snapshot of the current field values
    pub async fn fields(&self) -> FormFields {
        self.fields.read().await.clone()
    }

    /// Current error for one field, derived from the live values
    pub async fn field_error(&self, field: Field) -> Option<ValidationError> {
        self.fields.read().await.field_error(field)
    }

    /// All current field errors
    pub async fn field_errors(&self) -> Vec<(Field, ValidationError)> {
        self.fields.read().await.errors()
    }

    /// Whether every field passes its rules
    pub async fn is_valid(&self) -> bool {
        self.fields.read().await.is_valid()
    }

    /// Set the full name field
    pub async fn set_full_name(&self, value: impl Into<String>) {
        self.fields.write().await.full_name = value.into();
    }

    /// Set the email field
    pub async fn set_email(&self, value: impl Into<String>) {
        self.fields.write().await.email = value.into();
    }

    /// Set the phone number field
    pub async fn set_phone_number(&self, value: impl Into<String>) {
        self.fields.write().await.phone_number = value.into();
    }

    /// Set the description field
    pub async fn set_description(&self, value: impl Into<String>) {
        self.fields.write().await.description = value.into();
    }
}

impl Clone for ContactFormController {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            navigator: Arc::clone(&self.navigator),
            notifier: Arc::clone(&self.notifier),
            config: self.config.clone(),
            fields: Arc::clone(&self.fields),
            target: Arc::clone(&self.target),
            generation: Arc::clone(&self.generation),
        }
    }
}
