use serde::{Deserialize, Serialize};

use super::{EntryType, StreamEntry};
use crate::Timestamp;

/// A card shown in the timeline feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerCard {
    DidYouKnow { timestamp: Timestamp, text: String },
    Status { timestamp: Timestamp, text: String },
    Photo { timestamp: Timestamp, url: String },
    Video { timestamp: Timestamp, video_id: String },
}

impl TrackerCard {
    /// Build the card for a stream entry; entries of unknown type have none
    pub fn from_entry(entry: &StreamEntry) -> Option<Self> {
        let timestamp = entry.timestamp;
        let content = entry.content.clone();
        match entry.entry_type {
            EntryType::DidYouKnow => Some(TrackerCard::DidYouKnow {
                timestamp,
                text: content,
            }),
            EntryType::Status => Some(TrackerCard::Status {
                timestamp,
                text: content,
            }),
            EntryType::Photo => Some(TrackerCard::Photo {
                timestamp,
                url: content,
            }),
            EntryType::Video => Some(TrackerCard::Video {
                timestamp,
                video_id: content,
            }),
            EntryType::Unknown => None,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            TrackerCard::DidYouKnow { timestamp, .. }
            | TrackerCard::Status { timestamp, .. }
            | TrackerCard::Photo { timestamp, .. }
            | TrackerCard::Video { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry() {
        let entry = StreamEntry::new(1, EntryType::DidYouKnow, false, "a");
        assert_eq!(
            TrackerCard::from_entry(&entry),
            Some(TrackerCard::DidYouKnow {
                timestamp: 1,
                text: "a".to_string()
            })
        );

        let unknown = StreamEntry::new(1, EntryType::Unknown, false, "?");
        assert_eq!(TrackerCard::from_entry(&unknown), None);
    }
}
