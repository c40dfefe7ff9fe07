// Queue State - the ordered member list and id counter

use crate::domain::{IdentityKey, Member, MemberId};
use crate::error::{QueueError, Result};
use std::collections::HashSet;

/// Owned queue contents. Order is insertion order; removal never reorders survivors.
#[derive(Debug, Clone)]
pub struct QueueState {
    members: Vec<Member>,
    next_id: MemberId,
}

impl Default for QueueState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueState {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            next_id: 1,
        }
    }

    /// Build state from seed members, keeping their order.
    ///
    /// Seeds must have distinct ids, distinct identity keys, and identities that name
    /// input can reach (see [`IdentityKey::is_canonical`]). The id counter starts above
    /// the highest seed id.
    pub fn seeded(members: Vec<Member>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(members.len());
        let mut keys = HashSet::with_capacity(members.len());

        for member in &members {
            if !member.identity_key().is_canonical() {
                return Err(QueueError::InvalidSeed(format!(
                    "member {} has an identity no name can match: {:?}",
                    member.id,
                    member.display_name()
                )));
            }
            if !ids.insert(member.id) {
                return Err(QueueError::InvalidSeed(format!(
                    "duplicate member id {}",
                    member.id
                )));
            }
            if !keys.insert(member.identity_key()) {
                return Err(QueueError::InvalidSeed(format!(
                    "duplicate identity {}",
                    member.display_name()
                )));
            }
        }

        let max_id = members.iter().map(|m| m.id).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or_else(|| {
            QueueError::InvalidSeed(format!("member id {} leaves no room for new ids", max_id))
        })?;

        Ok(Self { members, next_id })
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn index_of(&self, key: &IdentityKey) -> Option<usize> {
        self.members.iter().position(|m| m.matches(key))
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Hand out the next id. Ids are never reused, even after the highest id leaves.
    /// The counter is left untouched when the id space is exhausted.
    pub(crate) fn allocate_id(&mut self) -> Result<MemberId> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| QueueError::Internal("member id space exhausted".to_string()))?;
        Ok(id)
    }

    pub(crate) fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Member {
        self.members.remove(index)
    }
}
