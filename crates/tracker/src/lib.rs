//! Santa Tracker
//!
//! Everything between raw route data and what the tracker screen shows:
//! - Loading `santa.json`-style route documents
//! - Working out where Santa is at a given time
//! - Publishing the timeline cards that are due, as a watchable stream

pub mod loader;
pub mod repository;
pub mod route;
pub mod service;
pub mod stream;

pub use loader::{JsonRouteLoader, RouteData};
pub use repository::InMemoryRepository;
pub use route::{TrackerStatus, locate, presents_delivered};
pub use service::TrackerService;
pub use stream::TrackerStream;
