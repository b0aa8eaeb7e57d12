use chrono::{DateTime, FixedOffset, Timelike};
use santa_core::Timestamp;

/// Format `time` as a zero-padded 24-hour `HH:MM` in `zone`
///
/// Builds a fresh date value on every call, so concurrent callers share
/// no mutable calendar state. Returns `None` if `time` is outside the
/// range chrono can represent.
pub fn format_hh_mm(time: Timestamp, zone: FixedOffset) -> Option<String> {
    let local = DateTime::from_timestamp_millis(time)?.with_timezone(&zone);
    Some(format!("{:02}:{:02}", local.hour(), local.minute()))
}
