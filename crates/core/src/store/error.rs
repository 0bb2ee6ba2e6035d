use thiserror::Error;
use uuid::Uuid;

use crate::datetime::DateTimeError;

/// Errors that can occur during event store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),
    #[error("Event already exists: {0}")]
    AlreadyExists(Uuid),
    #[error("Date arithmetic left the representable date range")]
    OutOfRange,
}

impl From<DateTimeError> for StoreError {
    fn from(error: DateTimeError) -> Self {
        match error {
            DateTimeError::OutOfRange => StoreError::OutOfRange,
        }
    }
}

/// Result type for event store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
