//! Error types for ck-core

use thiserror::Error;

/// Error type for contact service operations
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Create error: {0}")]
    CreateError(String),

    #[error("Update error: {0}")]
    UpdateError(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ck-core
pub type Result<T> = std::result::Result<T, Error>;
