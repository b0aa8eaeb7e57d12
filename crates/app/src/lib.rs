//! Santa Application
//!
//! Process-level wiring for the tracker:
//! - Running startup work on a background executor
//! - Detecting that a new version was installed
//! - Requesting a rebuild of the app index after an upgrade

pub mod application;
pub mod executor;
pub mod refresher;
pub mod upgrade;

pub use application::SantaApplication;
pub use executor::TokioExecutor;
pub use refresher::LoggingIndexRefresher;
pub use upgrade::{FileVersionStore, InMemoryVersionStore, UpgradeDetector};
