//! Santa Tracker Core Domain
//!
//! Pure domain types for the tracker: route destinations, timeline
//! stream entries and the cards rendered from them.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Destination, EntryType, Location, StreamEntry, TrackerCard};
pub use values::{MILLIS_PER_HOUR, Timestamp};
