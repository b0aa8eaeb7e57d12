use santa_core::Timestamp;

/// Port for time abstraction
///
/// This allows the tracker to use different time sources:
/// - Real system time
/// - Remotely offset time, to replay or preview the journey
/// - Fixed time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now_millis(&self) -> Timestamp;

    /// Map a timestamp on this clock back to real wall-clock time
    fn adjusted_time(&self, time: Timestamp) -> Timestamp;

    /// Format a timestamp on this clock as a zero-padded 24-hour `HH:MM`
    ///
    /// Returns `None` when the adjusted time cannot be represented as a date.
    fn format_time(&self, time: Timestamp) -> Option<String>;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
