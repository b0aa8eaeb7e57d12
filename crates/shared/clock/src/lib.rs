//! Santa Clock Infrastructure
//!
//! Provides time abstractions for the tracker:
//!
//! ## Clock Hierarchy
//!
//! ```text
//! SystemClock / FixedClock (base time source)
//!     │
//!     └── OffsettableClock (offset: ±X ms, read from remote config on every call)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use santa_clock::{OffsettableClock, SystemClock};
//! use std::sync::Arc;
//!
//! // Tracker time follows the remotely configured offset
//! let clock = OffsettableClock::new(config.clone());
//! let now = clock.now_millis();
//!
//! // Format a feed timestamp for display
//! let label = clock.format_time(now);
//! ```

mod fixed;
mod format;
mod offsettable;
mod system;

pub use fixed::FixedClock;
pub use format::format_hh_mm;
pub use offsettable::OffsettableClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use santa_ports::Clock;
