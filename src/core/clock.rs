//! Wall-clock source for finish marks.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Supplies the timestamp stamped on a player who empties their hand.
pub trait Clock {
    /// Milliseconds since the UNIX epoch.
    fn now_ms(&self) -> u64;
}

/// Reads the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(saturating_millis)
            .unwrap_or_default()
    }
}

fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Always returns the same instant. For fixtures and replays that must
/// compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}
