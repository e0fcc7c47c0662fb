//! Error handling for bomdesk-store
//!
//! Wraps bomdesk-core ExError with store-specific helpers

use bomdesk_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a schema provisioning error
pub fn provision_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("provision_schema")
        .with_message(format!("Schema provisioning failed: {}", reason))
}
