use chrono::{FixedOffset, Offset, Utc};
use santa_core::Timestamp;
use santa_ports::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::format_hh_mm;

/// Clock whose time only moves when told to
///
/// Useful for deterministic tests of anything that reads a [`Clock`].
pub struct FixedClock {
    current: AtomicI64,
    zone: FixedOffset,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self {
            current: AtomicI64::new(time),
            zone: Utc.fix(),
        }
    }

    /// Explicitly set the current time
    pub fn set(&self, time: Timestamp) {
        self.current.store(time, Ordering::SeqCst);
    }

    /// Move time forward (or backward, for negative `millis`)
    pub fn advance(&self, millis: i64) {
        self.current.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> Timestamp {
        self.current.load(Ordering::SeqCst)
    }

    fn adjusted_time(&self, time: Timestamp) -> Timestamp {
        time
    }

    fn format_time(&self, time: Timestamp) -> Option<String> {
        format_hh_mm(time, self.zone)
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_mode() {
        let clock = FixedClock::new(1_000);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now_millis(), 1_000);

        clock.advance(5_000);
        assert_eq!(clock.now_millis(), 6_000);

        clock.set(42);
        assert_eq!(clock.now_millis(), 42);
    }
}
