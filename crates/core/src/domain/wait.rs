// Wait Estimate - fixed-rate display heuristic

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated wait, rendered as `"20m"` or `"1h 5m"`.
///
/// Not a forecast: it ignores actual service rate, variance and throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaitEstimate {
    pub minutes: u64,
}

impl WaitEstimate {
    /// Wait for a 1-based position at `minutes_per_position`
    pub fn for_position(position: usize, minutes_per_position: u32) -> Self {
        Self {
            minutes: (position as u64).saturating_mul(u64::from(minutes_per_position)),
        }
    }

    pub fn hours(&self) -> u64 {
        self.minutes / 60
    }

    pub fn remainder_minutes(&self) -> u64 {
        self.minutes % 60
    }

    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.minutes.saturating_mul(60))
    }
}

impl fmt::Display for WaitEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes < 60 {
            write!(f, "{}m", self.minutes)
        } else {
            write!(f, "{}h {}m", self.hours(), self.remainder_minutes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_only_under_an_hour() {
        assert_eq!(WaitEstimate::for_position(1, 5).to_string(), "5m");
        assert_eq!(WaitEstimate::for_position(4, 5).to_string(), "20m");
        assert_eq!(WaitEstimate::for_position(11, 5).to_string(), "55m");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(WaitEstimate::for_position(12, 5).to_string(), "1h 0m");
        assert_eq!(WaitEstimate::for_position(13, 5).to_string(), "1h 5m");
        assert_eq!(WaitEstimate::for_position(30, 5).to_string(), "2h 30m");
    }

    #[test]
    fn test_custom_rate() {
        let wait = WaitEstimate::for_position(3, 25);
        assert_eq!(wait.minutes, 75);
        assert_eq!(wait.to_string(), "1h 15m");
        assert_eq!(wait.as_duration(), std::time::Duration::from_secs(75 * 60));
    }
}
