// Shared Queue Store - serialized access for more than one writer

use crate::application::queue_store::{QueueStore, Standing};
use crate::domain::{IdentityKey, Member, WaitEstimate};
use crate::error::{QueueError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe handle to a [`QueueStore`].
///
/// Every operation holds the lock for its whole duration, so the uniqueness check and the
/// append in `join` cannot interleave with another writer. Reads return owned snapshots.
#[derive(Clone)]
pub struct SharedQueueStore {
    inner: Arc<Mutex<QueueStore>>,
}

impl SharedQueueStore {
    pub fn new(store: QueueStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, QueueStore>> {
        self.inner
            .lock()
            .map_err(|e| QueueError::Internal(format!("queue lock poisoned: {}", e)))
    }

    pub fn join(&self, raw_name: &str) -> Result<Member> {
        self.lock()?.join(raw_name)
    }

    pub fn leave(&self, key: &IdentityKey) -> Result<Member> {
        self.lock()?.leave(key)
    }

    pub fn position(&self, key: &IdentityKey) -> Result<Option<usize>> {
        Ok(self.lock()?.position(key))
    }

    pub fn estimate_wait(&self, position: usize) -> Result<WaitEstimate> {
        Ok(self.lock()?.estimate_wait(position))
    }

    pub fn list(&self) -> Result<Vec<Member>> {
        Ok(self.lock()?.list().to_vec())
    }

    pub fn standing(&self, key: &IdentityKey) -> Result<Option<Standing>> {
        Ok(self.lock()?.standing(key))
    }

    pub fn standings(&self) -> Result<Vec<Standing>> {
        Ok(self.lock()?.standings())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}
