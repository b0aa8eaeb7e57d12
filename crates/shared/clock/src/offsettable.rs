use chrono::{FixedOffset, Offset, Utc};
use log::warn;
use santa_core::Timestamp;
use santa_ports::{Clock, ConfigSource, keys};
use std::sync::Arc;

use crate::{SystemClock, format_hh_mm};

/// Clock whose time is shifted by a remotely configured offset
///
/// Lets the tracker preview or replay the journey outside of the real
/// event window. The offset is read from [`keys::TIME_OFFSET`] on every
/// call, so a newly activated config value takes effect immediately.
///
/// A config read failure degrades to real time (offset 0) instead of
/// failing the caller.
pub struct OffsettableClock {
    /// Unshifted time source
    base: Arc<dyn Clock>,
    config: Arc<dyn ConfigSource>,
    /// Zone used when formatting times for display
    zone: FixedOffset,
}

impl OffsettableClock {
    /// Create an offset clock over the system clock, formatting in UTC
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self::with_base(Arc::new(SystemClock::new()), config)
    }

    /// Create an offset clock over an arbitrary base clock
    pub fn with_base(base: Arc<dyn Clock>, config: Arc<dyn ConfigSource>) -> Self {
        Self {
            base,
            config,
            zone: Utc.fix(),
        }
    }

    /// Format times in `zone` instead of UTC
    pub fn in_zone(mut self, zone: FixedOffset) -> Self {
        self.zone = zone;
        self
    }

    /// Current offset in milliseconds (positive = ahead of real time)
    pub fn time_offset(&self) -> i64 {
        match self.config.get_i64(keys::TIME_OFFSET.name) {
            Ok(offset) => offset,
            Err(e) => {
                warn!("Falling back to zero time offset: {}", e);
                0
            }
        }
    }

    pub fn zone(&self) -> FixedOffset {
        self.zone
    }
}

impl Clock for OffsettableClock {
    fn now_millis(&self) -> Timestamp {
        self.base.now_millis().saturating_add(self.time_offset())
    }

    fn adjusted_time(&self, time: Timestamp) -> Timestamp {
        time.saturating_sub(self.time_offset())
    }

    fn format_time(&self, time: Timestamp) -> Option<String> {
        format_hh_mm(self.adjusted_time(time), self.zone)
    }

    fn name(&self) -> &str {
        "OffsettableClock"
    }
}
