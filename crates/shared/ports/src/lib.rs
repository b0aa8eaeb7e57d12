//! Santa Tracker Ports
//!
//! Port definitions (traits) for the Santa tracker.
//! These define the boundaries between domain logic and infrastructure:
//! where time comes from, where remote settings come from, where
//! background work runs and where route data is loaded from.

mod clock;
mod config;
mod error;
mod executor;
mod repository;
mod upgrade;

pub use clock::Clock;
pub use config::{ConfigKey, ConfigSource, keys};
pub use error::{
    ConfigError, ConfigResult, RepositoryError, RepositoryResult, VersionStoreError,
    VersionStoreResult,
};
pub use executor::{Task, TaskExecutor};
pub use repository::SantaDataRepository;
pub use upgrade::{IndexRefresher, VersionStore};
