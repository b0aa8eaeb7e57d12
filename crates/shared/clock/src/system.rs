use chrono::{FixedOffset, Offset, Utc};
use santa_core::Timestamp;
use santa_ports::Clock;

use crate::format_hh_mm;

/// Real system clock
///
/// This simply returns the current wall-clock time, with no offset.
pub struct SystemClock {
    zone: FixedOffset,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::with_zone(Utc.fix())
    }

    /// Create a system clock that formats times in `zone`
    pub fn with_zone(zone: FixedOffset) -> Self {
        Self { zone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> Timestamp {
        Utc::now().timestamp_millis()
    }

    fn adjusted_time(&self, time: Timestamp) -> Timestamp {
        time
    }

    fn format_time(&self, time: Timestamp) -> Option<String> {
        format_hh_mm(time, self.zone)
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::new();
        let time1 = clock.now_millis();
        thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now_millis();

        assert!(time2 > time1);
        assert!(time2 - time1 >= 9);
    }

    #[test]
    fn test_no_adjustment() {
        let clock = SystemClock::new();
        assert_eq!(clock.adjusted_time(1514109600000), 1514109600000);
        assert_eq!(clock.format_time(1514109600000).as_deref(), Some("10:00"));
    }
}
