// Join Use Case

use super::state::QueueState;
use crate::domain::{parse_name, Member};
use crate::error::{QueueError, Result};
use crate::port::TimeProvider;
use tracing::{debug, info};

/// Execute join use case
///
/// # Arguments
///
/// * `state` - Queue state to append to
/// * `time_provider` - Clock for `joined_at` (injected for determinism)
/// * `raw_name` - Full name as typed by the user
///
/// Nothing is mutated when the name is blank or the identity is already queued.
pub fn execute(
    state: &mut QueueState,
    time_provider: &dyn TimeProvider,
    raw_name: &str,
) -> Result<Member> {
    let key = parse_name(raw_name).map_err(|e| {
        debug!(error = %e, "Rejected join request");
        QueueError::from(e)
    })?;

    if state.contains(&key) {
        debug!(identity = %key, "Rejected duplicate join");
        return Err(QueueError::Duplicate(key));
    }

    let id = state.allocate_id()?;
    let member = Member::new(id, key, time_provider.now_millis());
    state.push(member.clone());

    info!(
        member_id = member.id,
        identity = %member.display_name(),
        position = state.members().len(),
        "Member joined queue"
    );

    Ok(member)
}
