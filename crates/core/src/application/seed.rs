// Seed data for a fresh queue

use crate::domain::{IdentityKey, Member};

/// The three members a demo queue starts with, ids 1..=3, all joined at `now_millis`
pub fn demo_members(now_millis: i64) -> Vec<Member> {
    vec![
        Member::new(1, IdentityKey::new("John", Some('D')), now_millis),
        Member::new(2, IdentityKey::new("Jane", Some('S')), now_millis),
        Member::new(3, IdentityKey::new("Mike", Some('J')), now_millis),
    ]
}
