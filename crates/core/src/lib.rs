// Waitlist Core - Queue State & Ports
// NO terminal or I/O dependencies

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{QueueStore, SharedQueueStore, Standing};
pub use domain::{parse_name, IdentityKey, Member, MemberId, QueueConfig, WaitEstimate};
pub use error::{QueueError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
