// Leave Use Case

use super::state::QueueState;
use crate::domain::{IdentityKey, Member};
use crate::error::{QueueError, Result};
use tracing::{debug, info};

/// Execute leave use case
///
/// Removes the first member matching `key`. Survivors keep their relative order.
pub fn execute(state: &mut QueueState, key: &IdentityKey) -> Result<Member> {
    let Some(index) = state.index_of(key) else {
        debug!(identity = %key, "Leave requested for absent member");
        return Err(QueueError::NotFound(key.clone()));
    };

    let member = state.remove_at(index);

    info!(
        member_id = member.id,
        identity = %key,
        remaining = state.members().len(),
        "Member left queue"
    );

    Ok(member)
}
