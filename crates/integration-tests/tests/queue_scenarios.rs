//! Queue Scenario Tests
//!
//! Exercises the store through its public API exactly as a front-end would.

use std::sync::Arc;

use waitlist_core::application::demo_members;
use waitlist_core::port::TimeProvider;
use waitlist_core::{parse_name, IdentityKey, QueueConfig, QueueError, QueueStore};

struct FixedTimeProvider(i64);

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

fn seeded_store() -> QueueStore {
    QueueStore::with_members(
        QueueConfig::default(),
        Arc::new(FixedTimeProvider(2_000)),
        demo_members(1_000),
    )
    .unwrap()
}

/// Scenario 1: a newcomer lands at the back with the next id
#[test]
fn test_join_after_seed() {
    let mut store = seeded_store();

    let alice = store.join("Alice Brown").unwrap();
    let key = alice.identity_key();

    assert_eq!(alice.id, 4);
    assert_eq!(alice.joined_at, 2_000);
    assert_eq!(key, IdentityKey::new("Alice", Some('B')));

    let position = store.position(&key).unwrap();
    assert_eq!(position, 4);
    assert_eq!(store.estimate_wait(position).to_string(), "20m");
}

/// Scenario 2: the seeded John D. blocks another "John Doe"
#[test]
fn test_duplicate_of_seed_member() {
    let mut store = seeded_store();

    let result = store.join("John Doe");

    assert_eq!(
        result,
        Err(QueueError::Duplicate(IdentityKey::new("John", Some('D'))))
    );
    assert_eq!(store.len(), 3);

    // Retrying keeps failing until the holder leaves
    assert!(store.join("John Doe").is_err());
    store.leave(&IdentityKey::new("John", Some('D'))).unwrap();
    assert!(store.join("John Doe").is_ok());
}

/// Scenario 3: single-token names have an empty last initial
#[test]
fn test_single_token_name() {
    let mut store = seeded_store();

    let madonna = store.join("Madonna").unwrap();

    assert_eq!(madonna.identity_key(), IdentityKey::new("Madonna", None));
    assert_eq!(madonna.identity_key().last_initial_str(), "");
    assert_eq!(store.join("Madonna"), Err(QueueError::Duplicate(IdentityKey::new("Madonna", None))));
}

/// Position equals insertion rank among members still present
#[test]
fn test_positions_follow_insertion_order() {
    let mut store = QueueStore::new(QueueConfig::default(), Arc::new(FixedTimeProvider(0)));
    let names = ["Ann Lee", "Ben Ortiz", "Cy Young", "Dee Snider", "Eve Polastri"];

    for name in names {
        store.join(name).unwrap();
    }
    for (index, name) in names.iter().enumerate() {
        let key = parse_name(name).unwrap();
        assert_eq!(store.position(&key), Some(index + 1));
    }

    store.leave(&parse_name("Ben Ortiz").unwrap()).unwrap();
    store.leave(&parse_name("Dee Snider").unwrap()).unwrap();

    let remaining: Vec<_> = store.list().iter().map(|m| m.display_name()).collect();
    assert_eq!(remaining, ["Ann L.", "Cy Y.", "Eve P."]);
    assert_eq!(store.position(&parse_name("Eve Polastri").unwrap()), Some(3));
}

/// Whitespace-only input is a validation error and leaves the list alone
#[test]
fn test_blank_name_rejected() {
    let mut store = seeded_store();

    for raw in ["", "   ", "\t\n"] {
        let err = store.join(raw).unwrap_err();
        assert!(matches!(err, QueueError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: empty name");
    }
    assert_eq!(store.len(), 3);
}

/// Leave shrinks the list by exactly one and the key disappears
#[test]
fn test_leave_shrinks_by_one() {
    let mut store = seeded_store();
    let jane = IdentityKey::new("Jane", Some('S'));

    store.leave(&jane).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.position(&jane), None);
    assert!(store.get(&jane).is_none());
}

/// Wait estimate display units
#[test]
fn test_wait_estimates() {
    let store = seeded_store();

    assert_eq!(store.estimate_wait(1).to_string(), "5m");
    assert_eq!(store.estimate_wait(12).to_string(), "1h 0m");
    assert_eq!(store.estimate_wait(13).to_string(), "1h 5m");
}

/// The list view serializes as an ordered JSON array
#[test]
fn test_standings_serialize() {
    let store = seeded_store();

    let json = serde_json::to_value(store.standings()).unwrap();

    assert_eq!(json[0]["member"]["first_name"], "John");
    assert_eq!(json[0]["member"]["last_initial"], "D");
    assert_eq!(json[2]["position"], 3);
    assert_eq!(json[2]["wait"]["minutes"], 15);
}
