use crate::error::ConfigResult;

/// A named remote-config parameter with its in-app default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey<T> {
    pub name: &'static str,
    pub default: T,
}

impl<T> ConfigKey<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }
}

/// Parameters the tracker reads from remote config
pub mod keys {
    use super::ConfigKey;

    /// Milliseconds added to wall-clock time (positive = ahead, negative = behind)
    pub const TIME_OFFSET: ConfigKey<i64> = ConfigKey::new("SantaTimeOffset", 0);

    /// How often route data should be re-fetched
    pub const ROUTE_REFRESH_INTERVAL_MS: ConfigKey<i64> =
        ConfigKey::new("RouteRefreshIntervalMs", 60_000);

    /// Kill switch for the tracker screen
    pub const DISABLE_TRACKER: ConfigKey<bool> = ConfigKey::new("DisableTracker", false);
}

/// Port for a key-value settings source
///
/// Values are read on every call; implementations must not hand out
/// stale snapshots to callers.
pub trait ConfigSource: Send + Sync {
    fn get_i64(&self, name: &str) -> ConfigResult<i64>;

    fn get_bool(&self, name: &str) -> ConfigResult<bool>;

    fn get_string(&self, name: &str) -> ConfigResult<String>;
}
