// Central Error Type for the queue store

use crate::domain::IdentityKey;
use thiserror::Error;

/// Store-level error type
///
/// Every variant is local and recoverable; callers surface the message to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Validation error: {0}")]
    Validation(#[from] crate::domain::DomainError),

    #[error("{0} is already in the queue")]
    Duplicate(IdentityKey),

    #[error("{0} is not in the queue")]
    NotFound(IdentityKey),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using QueueError
pub type Result<T> = std::result::Result<T, QueueError>;
