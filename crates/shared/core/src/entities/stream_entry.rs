use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Kind of content carried by a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    DidYouKnow,
    Status,
    Photo,
    Video,
    /// Anything the feed sends that this build does not know how to show
    #[serde(other)]
    Unknown,
}

/// A single item of the timeline feed, published at `timestamp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Whether the entry should also raise a notification
    #[serde(default, rename = "notification")]
    pub is_notification: bool,
    pub content: String,
}

impl StreamEntry {
    pub fn new(
        timestamp: Timestamp,
        entry_type: EntryType,
        is_notification: bool,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            entry_type,
            is_notification,
            content: content.into(),
        }
    }

    /// True once the entry's publish time has been reached
    pub fn is_published(&self, now: Timestamp) -> bool {
        self.timestamp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_published_boundary() {
        let entry = StreamEntry::new(100, EntryType::Status, false, "Leaving the North Pole");
        assert!(!entry.is_published(99));
        assert!(entry.is_published(100));
        assert!(entry.is_published(101));
    }

    #[test]
    fn test_unknown_type_deserializes() {
        let json = r#"{"timestamp": 5, "type": "hologram", "content": "x"}"#;
        let entry: StreamEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Unknown);
        assert!(!entry.is_notification);
    }
}
