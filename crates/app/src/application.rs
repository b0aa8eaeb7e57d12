//! Application startup

use log::{info, warn};
use santa_ports::{IndexRefresher, TaskExecutor};
use std::sync::Arc;

use crate::UpgradeDetector;

/// Process-wide application object
///
/// Collaborators are passed in explicitly; there is no injection
/// container.
pub struct SantaApplication {
    executor: Arc<dyn TaskExecutor>,
    upgrade_detector: Arc<UpgradeDetector>,
    index_refresher: Arc<dyn IndexRefresher>,
}

impl SantaApplication {
    pub fn new(
        executor: Arc<dyn TaskExecutor>,
        upgrade_detector: Arc<UpgradeDetector>,
        index_refresher: Arc<dyn IndexRefresher>,
    ) -> Self {
        Self {
            executor,
            upgrade_detector,
            index_refresher,
        }
    }

    /// Startup hook
    ///
    /// Returns immediately. The upgrade check runs on the executor,
    /// unordered relative to the rest of startup; its failures are
    /// logged and go no further.
    pub fn on_create(&self) {
        info!(
            "Santa application starting (version code {})",
            self.upgrade_detector.current_version()
        );

        let detector = self.upgrade_detector.clone();
        let refresher = self.index_refresher.clone();
        self.executor.execute(Box::new(move || {
            match detector.has_version_code_changed() {
                Ok(true) => refresher.enqueue_refresh(),
                Ok(false) => {}
                Err(e) => warn!("Upgrade check failed: {}", e),
            }
        }));
    }
}
