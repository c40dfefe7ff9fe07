// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty name")]
    EmptyName,

    #[error("invalid queue config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
