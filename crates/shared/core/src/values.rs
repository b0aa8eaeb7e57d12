/// Milliseconds since the Unix epoch
///
/// Kept as a plain signed integer: offsets are added and removed
/// arithmetically and may push a value before the epoch.
pub type Timestamp = i64;

pub const MILLIS_PER_HOUR: i64 = 3_600_000;
