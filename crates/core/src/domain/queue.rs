// Queue Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Queue identifier
pub type QueueId = String;

pub const DEFAULT_QUEUE_NAME: &str = "waitlist";
pub const DEFAULT_MINUTES_PER_POSITION: u32 = 5;

/// Queue configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    pub name: QueueId,
    pub minutes_per_position: u32,
}

impl QueueConfig {
    pub fn new(name: impl Into<String>, minutes_per_position: u32) -> Self {
        Self {
            name: name.into(),
            minutes_per_position,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidConfig("queue name is empty".to_string()));
        }
        if self.minutes_per_position == 0 {
            return Err(DomainError::InvalidConfig(
                "minutes per position must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_NAME, DEFAULT_MINUTES_PER_POSITION)
    }
}
