// Member Domain Model

use crate::domain::identity::IdentityKey;
use serde::{Deserialize, Serialize};

/// Member ID (monotonic, never reused within a process)
pub type MemberId = u64;

/// A person currently waiting in the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_initial: Option<char>,

    /// Display only; queue order is insertion order, not this timestamp
    pub joined_at: i64, // epoch ms
}

impl Member {
    /// Create a new Member
    ///
    /// # Arguments
    ///
    /// * `id` - Member ID (allocated by the store, not generated here)
    /// * `key` - Identity key parsed from the submitted name
    /// * `joined_at` - Join timestamp in epoch ms (injected, not system time)
    pub fn new(id: MemberId, key: IdentityKey, joined_at: i64) -> Self {
        Self {
            id,
            first_name: key.first_name,
            last_initial: key.last_initial,
            joined_at,
        }
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(self.first_name.clone(), self.last_initial)
    }

    /// Exact, case-sensitive identity match
    pub fn matches(&self, key: &IdentityKey) -> bool {
        self.first_name == key.first_name && self.last_initial == key.last_initial
    }

    pub fn display_name(&self) -> String {
        self.identity_key().to_string()
    }
}
