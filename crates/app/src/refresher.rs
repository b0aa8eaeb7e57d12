use log::info;
use santa_ports::IndexRefresher;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Index refresher that records requests
///
/// Stands in for a platform job scheduler; each request is logged and
/// counted.
#[derive(Default)]
pub struct LoggingIndexRefresher {
    requests: AtomicUsize,
}

impl LoggingIndexRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refreshes requested so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl IndexRefresher for LoggingIndexRefresher {
    fn enqueue_refresh(&self) {
        let n = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        info!("App index refresh enqueued (request #{})", n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_requests() {
        let refresher = LoggingIndexRefresher::new();
        assert_eq!(refresher.requests(), 0);
        refresher.enqueue_refresh();
        refresher.enqueue_refresh();
        assert_eq!(refresher.requests(), 2);
    }
}
