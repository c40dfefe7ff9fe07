// Application Layer - Use Cases over the queue

pub mod queue_store;
pub mod seed;
pub mod shared;

// Re-exports
pub use queue_store::{QueueStore, Standing};
pub use seed::demo_members;
pub use shared::SharedQueueStore;
