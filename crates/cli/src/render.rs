//! Plain-text rendering of queue views

use chrono::{DateTime, Local};
use tabled::{Table, Tabled};
use waitlist_core::{IdentityKey, Standing};

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Wait")]
    wait: String,
    #[tabled(rename = "Joined")]
    joined: String,
    #[tabled(rename = "")]
    marker: &'static str,
}

fn format_joined(joined_at: i64) -> String {
    DateTime::from_timestamp_millis(joined_at)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Queue table, marking the row that belongs to `me`
pub fn standings_table(standings: &[Standing], me: Option<&IdentityKey>) -> String {
    if standings.is_empty() {
        return "The queue is empty".to_string();
    }

    let rows = standings.iter().map(|s| StandingRow {
        position: s.position,
        name: s.member.display_name(),
        wait: s.wait.to_string(),
        joined: format_joined(s.member.joined_at),
        marker: match me {
            Some(key) if s.member.matches(key) => "<- you",
            _ => "",
        },
    });

    Table::new(rows).to_string()
}

/// One-line summary of a session's own standing
pub fn standing_summary(standing: &Standing) -> String {
    format!(
        "{}, you are #{} in line. Estimated wait: {}",
        standing.member.display_name(),
        standing.position,
        standing.wait
    )
}
