//! Where is Santa right now?

use santa_core::{Destination, Timestamp};

/// Santa's position on the route at a point in time
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerStatus {
    /// The route has no stops
    NoRoute,
    /// Before arrival at the first stop
    NotStarted { first: Destination },
    /// On the ground at a stop
    Visiting(Destination),
    /// Flying between two consecutive stops
    InTransit { from: Destination, to: Destination },
    /// Departed the final stop
    Finished { last: Destination },
}

/// Locate Santa on a route ordered by arrival
pub fn locate(destinations: &[Destination], now: Timestamp) -> TrackerStatus {
    let Some(last) = destinations.last() else {
        return TrackerStatus::NoRoute;
    };

    // First stop not yet departed
    let next = destinations.partition_point(|dest| dest.has_departed(now));
    let Some(current) = destinations.get(next) else {
        return TrackerStatus::Finished { last: last.clone() };
    };

    if current.has_arrived(now) {
        TrackerStatus::Visiting(current.clone())
    } else if next == 0 {
        TrackerStatus::NotStarted {
            first: current.clone(),
        }
    } else {
        TrackerStatus::InTransit {
            from: destinations[next - 1].clone(),
            to: current.clone(),
        }
    }
}

/// Presents delivered by all stops already departed
pub fn presents_delivered(destinations: &[Destination], now: Timestamp) -> u64 {
    destinations
        .iter()
        .take_while(|dest| dest.has_departed(now))
        .map(|dest| dest.presents_delivered)
        .fold(0u64, u64::saturating_add)
}
