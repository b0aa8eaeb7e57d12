mod destination;
mod stream_entry;
mod tracker_card;

pub use destination::{Destination, Location};
pub use stream_entry::{EntryType, StreamEntry};
pub use tracker_card::TrackerCard;
