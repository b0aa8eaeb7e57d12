//! Route document parsing

use log::debug;
use santa_core::{Destination, StreamEntry};
use santa_ports::{RepositoryError, RepositoryResult};
use serde::Deserialize;
use std::path::Path;

/// Parsed route document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouteData {
    pub destinations: Vec<Destination>,
    #[serde(default, rename = "stream")]
    pub stream_entries: Vec<StreamEntry>,
}

/// Loads route documents of the form `{"destinations": [...], "stream": [...]}`
pub struct JsonRouteLoader;

impl JsonRouteLoader {
    /// Parse and validate a route document
    ///
    /// Destinations must be ordered by arrival and never depart before
    /// they arrive. Stream entries are sorted by timestamp.
    pub fn parse(json: &str) -> RepositoryResult<RouteData> {
        let mut data: RouteData =
            serde_json::from_str(json).map_err(|e| RepositoryError::Malformed(e.to_string()))?;

        for dest in &data.destinations {
            if dest.departure < dest.arrival {
                return Err(RepositoryError::Malformed(format!(
                    "{} departs before it arrives",
                    dest.id
                )));
            }
        }
        if let Some(pair) = data
            .destinations
            .windows(2)
            .find(|pair| pair[1].arrival < pair[0].departure)
        {
            return Err(RepositoryError::Malformed(format!(
                "{} arrives before {} departs",
                pair[1].id, pair[0].id
            )));
        }

        data.stream_entries.sort_by_key(|entry| entry.timestamp);

        debug!(
            "Parsed route: {} destinations, {} stream entries",
            data.destinations.len(),
            data.stream_entries.len()
        );
        Ok(data)
    }

    pub fn load_file(path: impl AsRef<Path>) -> RepositoryResult<RouteData> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_core::EntryType;

    const ROUTE: &str = r#"{
        "destinations": [
            {"id": "takeoff", "city": "North Pole", "arrival": 1514109540000,
             "departure": 1514109600000, "location": {"lat": 84.6, "lng": 168.0}},
            {"id": "provideniya", "city": "Provideniya", "region": "Russia",
             "arrival": 1514110020000, "departure": 1514110080000,
             "location": {"lat": 64.42, "lng": -173.23}, "presentsDelivered": 7040}
        ],
        "stream": [
            {"timestamp": 1514110100000, "type": "status", "content": "Over the Bering Sea"},
            {"timestamp": 1514109700000, "type": "did_you_know", "notification": true,
             "content": "Reindeer can see ultraviolet light"}
        ]
    }"#;

    #[test]
    fn test_parse_route() {
        let data = JsonRouteLoader::parse(ROUTE).unwrap();
        assert_eq!(data.destinations.len(), 2);
        assert_eq!(data.destinations[1].print_name(), "Provideniya, Russia");
        assert_eq!(data.destinations[1].presents_delivered, 7040);

        // sorted by timestamp
        assert_eq!(data.stream_entries[0].entry_type, EntryType::DidYouKnow);
        assert!(data.stream_entries[0].is_notification);
        assert_eq!(data.stream_entries[1].entry_type, EntryType::Status);
    }

    #[test]
    fn test_stream_is_optional() {
        let data = JsonRouteLoader::parse(r#"{"destinations": []}"#).unwrap();
        assert!(data.stream_entries.is_empty());
    }

    #[test]
    fn test_rejects_backwards_visit() {
        let json = r#"{"destinations": [
            {"id": "x", "city": "X", "arrival": 10, "departure": 5,
             "location": {"lat": 0, "lng": 0}}
        ]}"#;
        assert!(matches!(
            JsonRouteLoader::parse(json),
            Err(RepositoryError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_overlapping_stops() {
        let json = r#"{"destinations": [
            {"id": "a", "city": "A", "arrival": 0, "departure": 10,
             "location": {"lat": 0, "lng": 0}},
            {"id": "b", "city": "B", "arrival": 5, "departure": 20,
             "location": {"lat": 1, "lng": 1}}
        ]}"#;
        let err = JsonRouteLoader::parse(json).unwrap_err();
        assert_eq!(err.to_string(), "Malformed route data: b arrives before a departs");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            JsonRouteLoader::parse("not json"),
            Err(RepositoryError::Malformed(_))
        ));
    }
}
