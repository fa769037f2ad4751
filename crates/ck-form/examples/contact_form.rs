//! Minimal host wiring: in-memory service, recording navigator, one
//! create and one edit round through the controller.
//!
//! Run with: `cargo run -p ck-form --example contact_form`

use std::sync::Arc;

use ck_core::{InMemoryContactStore, RecordingNavigator};
use ck_form::{ContactFormController, EditTarget, Field, SubmitOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("debug".parse()?))
        .init();

    let store = Arc::new(InMemoryContactStore::new());
    let navigator = Arc::new(RecordingNavigator::new());

    // Create mode.
    let controller = ContactFormController::new(store.clone(), navigator.clone());
    controller.set_full_name("Ana Diaz").await;
    controller.set_email("ana@mail.com").await;
    controller.set_phone_number("5551234").await;
    println!("email error: {:?}", controller.field_error(Field::Email).await);

    let outcome = controller.submit().await;
    println!("create submit: {outcome:?}");
    let SubmitOutcome::Saved(record) = outcome else {
        return Err("create did not save".into());
    };

    // Edit mode against the record just created.
    let editor = ContactFormController::new(store.clone(), navigator.clone());
    if let Some(handle) = editor
        .set_edit_target(EditTarget::from_route_param(record.id.clone()))
        .await
    {
        println!("populate outcome: {:?}", handle.await?);
    }
    editor.set_description("met at the conference").await;
    println!("edit submit: {:?}", editor.submit().await);
    println!("navigated to: {:?}", navigator.paths());

    Ok(())
}
