// Domain Layer - Pure business logic and entities

pub mod error;
pub mod identity;
pub mod member;
pub mod queue;
pub mod wait;

// Re-exports
pub use error::DomainError;
pub use identity::{parse_name, IdentityKey};
pub use member::{Member, MemberId};
pub use queue::{QueueConfig, QueueId};
pub use wait::WaitEstimate;
