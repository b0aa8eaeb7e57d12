//! Ties repository, clock and stream together

use log::{info, warn};
use santa_ports::{Clock, ConfigSource, RepositoryResult, SantaDataRepository, keys};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{TrackerStatus, TrackerStream, locate, presents_delivered};

/// Tracker screen backend
///
/// Reads route data from the repository and judges what is due using
/// the injected clock, so an offset clock shifts the whole experience.
pub struct TrackerService {
    repository: Arc<dyn SantaDataRepository>,
    clock: Arc<dyn Clock>,
    stream: TrackerStream,
}

impl TrackerService {
    pub fn new(repository: Arc<dyn SantaDataRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            stream: TrackerStream::new(),
        }
    }

    pub fn stream(&self) -> &TrackerStream {
        &self.stream
    }

    /// Re-publish the cards due now; returns the card count
    pub fn refresh(&self) -> RepositoryResult<usize> {
        let entries = self.repository.load_stream_entries()?;
        Ok(self.stream.update_stream(&entries, self.clock.now_millis()))
    }

    /// Where Santa is now
    pub fn status(&self) -> RepositoryResult<TrackerStatus> {
        let destinations = self.repository.load_destinations()?;
        Ok(locate(&destinations, self.clock.now_millis()))
    }

    /// Presents delivered so far
    pub fn presents_delivered(&self) -> RepositoryResult<u64> {
        let destinations = self.repository.load_destinations()?;
        Ok(presents_delivered(&destinations, self.clock.now_millis()))
    }

    /// Refresh period from remote config
    ///
    /// Unreadable or non-positive values fall back to the in-app default.
    pub fn refresh_period(config: &dyn ConfigSource) -> Duration {
        let key = keys::ROUTE_REFRESH_INTERVAL_MS;
        let millis = match config.get_i64(key.name) {
            Ok(millis) if millis > 0 => millis,
            Ok(millis) => {
                warn!("Ignoring non-positive refresh interval {} ms", millis);
                key.default
            }
            Err(e) => {
                warn!("Using default refresh interval: {}", e);
                key.default
            }
        };
        Duration::from_millis(millis.unsigned_abs())
    }

    /// Refresh on a fixed period until `shutdown` flips to true
    ///
    /// Refresh failures are logged and retried on the next tick.
    pub fn spawn_refresh_loop(
        self: Arc<Self>,
        period: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("Tracker refresh loop started ({:?} period)", period);
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = self.refresh() {
                            warn!("Tracker refresh failed: {}", e);
                        }
                    }
                    res = shutdown.changed() => {
                        if res.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("Tracker refresh loop stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_ports::{ConfigError, ConfigResult};

    struct IntervalConfig(ConfigResult<i64>);

    impl ConfigSource for IntervalConfig {
        fn get_i64(&self, name: &str) -> ConfigResult<i64> {
            assert_eq!(name, keys::ROUTE_REFRESH_INTERVAL_MS.name);
            self.0.clone()
        }

        fn get_bool(&self, name: &str) -> ConfigResult<bool> {
            Err(ConfigError::Missing(name.to_string()))
        }

        fn get_string(&self, name: &str) -> ConfigResult<String> {
            Err(ConfigError::Missing(name.to_string()))
        }
    }

    #[test]
    fn test_refresh_period_from_config() {
        let period = TrackerService::refresh_period(&IntervalConfig(Ok(5_000)));
        assert_eq!(period, Duration::from_secs(5));
    }

    #[test]
    fn test_refresh_period_fallback() {
        let default = Duration::from_millis(60_000);
        assert_eq!(TrackerService::refresh_period(&IntervalConfig(Ok(0))), default);
        assert_eq!(TrackerService::refresh_period(&IntervalConfig(Ok(-10))), default);
        assert_eq!(
            TrackerService::refresh_period(&IntervalConfig(Err(ConfigError::Unavailable(
                "offline".to_string()
            )))),
            default
        );
    }
}
