use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A stop on the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub city: String,
    #[serde(default)]
    pub region: String,
    pub arrival: Timestamp,
    pub departure: Timestamp,
    pub location: Location,
    #[serde(default)]
    pub presents_delivered: u64,
}

impl Destination {
    pub fn has_arrived(&self, now: Timestamp) -> bool {
        now >= self.arrival
    }

    pub fn has_departed(&self, now: Timestamp) -> bool {
        now >= self.departure
    }

    /// Arrived but not yet departed
    pub fn is_visiting(&self, now: Timestamp) -> bool {
        self.has_arrived(now) && !self.has_departed(now)
    }

    /// Display name, "City, Region" when a region is known
    pub fn print_name(&self) -> String {
        if self.region.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.region)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sydney() -> Destination {
        Destination {
            id: "sydney".to_string(),
            city: "Sydney".to_string(),
            region: "Australia".to_string(),
            arrival: 1514120880000,
            departure: 1514120940000,
            location: Location {
                lat: -33.87,
                lng: 151.21,
            },
            presents_delivered: 0,
        }
    }

    #[test]
    fn test_visit_window() {
        let dest = sydney();
        assert!(!dest.is_visiting(1514120879999));
        assert!(dest.is_visiting(1514120880000));
        assert!(dest.is_visiting(1514120939999));
        assert!(!dest.is_visiting(1514120940000));
        assert!(dest.has_departed(1514120940000));
    }

    #[test]
    fn test_print_name() {
        let mut dest = sydney();
        assert_eq!(dest.print_name(), "Sydney, Australia");
        dest.region.clear();
        assert_eq!(dest.print_name(), "Sydney");
    }
}
