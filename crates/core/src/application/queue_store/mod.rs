// Queue Store - join/leave/position/wait over an ordered member list

pub mod join;
pub mod leave;
pub mod state;

pub use state::QueueState;

use crate::domain::{parse_name, IdentityKey, Member, QueueConfig, WaitEstimate};
use crate::error::Result;
use crate::port::TimeProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A member together with its derived position and wait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank in the current order
    pub position: usize,
    pub member: Member,
    pub wait: WaitEstimate,
}

/// Queue Store
///
/// Exclusively owns the member list. Safe for single-threaded access only; wrap it in
/// [`SharedQueueStore`](crate::application::SharedQueueStore) when more than one writer exists.
///
/// The store has no notion of a "current user": callers keep the identity key they joined
/// with and pass it back for `leave`/`position`.
pub struct QueueStore {
    config: QueueConfig,
    state: QueueState,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueStore {
    /// Create an empty store
    pub fn new(config: QueueConfig, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            config,
            state: QueueState::new(),
            time_provider,
        }
    }

    /// Create a store pre-populated with `members`, in the given order
    pub fn with_members(
        config: QueueConfig,
        time_provider: Arc<dyn TimeProvider>,
        members: Vec<Member>,
    ) -> Result<Self> {
        Ok(Self {
            config,
            state: QueueState::seeded(members)?,
            time_provider,
        })
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Append a new member parsed from `raw_name`
    pub fn join(&mut self, raw_name: &str) -> Result<Member> {
        join::execute(&mut self.state, self.time_provider.as_ref(), raw_name)
    }

    /// Remove the member with this identity
    pub fn leave(&mut self, key: &IdentityKey) -> Result<Member> {
        leave::execute(&mut self.state, key)
    }

    /// Parse `raw_name` and remove the matching member
    pub fn leave_by_name(&mut self, raw_name: &str) -> Result<Member> {
        let key = parse_name(raw_name)?;
        self.leave(&key)
    }

    /// 1-based position of the member with this identity
    pub fn position(&self, key: &IdentityKey) -> Option<usize> {
        self.state.index_of(key).map(|index| index + 1)
    }

    /// Wait for a 1-based position at the configured rate
    pub fn estimate_wait(&self, position: usize) -> WaitEstimate {
        WaitEstimate::for_position(position, self.config.minutes_per_position)
    }

    pub fn get(&self, key: &IdentityKey) -> Option<&Member> {
        self.state.index_of(key).map(|index| &self.state.members()[index])
    }

    /// Read-only view of the ordered members
    pub fn list(&self) -> &[Member] {
        self.state.members()
    }

    pub fn len(&self) -> usize {
        self.state.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.members().is_empty()
    }

    /// Position and wait for one member
    pub fn standing(&self, key: &IdentityKey) -> Option<Standing> {
        let position = self.position(key)?;
        let member = self.state.members()[position - 1].clone();
        Some(Standing {
            position,
            member,
            wait: self.estimate_wait(position),
        })
    }

    /// Position and wait for every member, in queue order
    pub fn standings(&self) -> Vec<Standing> {
        self.state
            .members()
            .iter()
            .enumerate()
            .map(|(index, member)| Standing {
                position: index + 1,
                member: member.clone(),
                wait: self.estimate_wait(index + 1),
            })
            .collect()
    }
}
