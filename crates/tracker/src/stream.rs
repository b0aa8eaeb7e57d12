//! Timeline card stream

use log::debug;
use santa_core::{StreamEntry, Timestamp, TrackerCard};
use tokio::sync::watch;

/// Latest list of timeline cards, observable by any number of watchers
///
/// Observers always see the most recent list; intermediate lists
/// published faster than an observer reads them may be skipped.
pub struct TrackerStream {
    tx: watch::Sender<Vec<TrackerCard>>,
}

impl TrackerStream {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Observe the stream; the receiver starts at the current list
    pub fn subscribe(&self) -> watch::Receiver<Vec<TrackerCard>> {
        self.tx.subscribe()
    }

    /// Snapshot of the current list
    pub fn current(&self) -> Vec<TrackerCard> {
        self.tx.borrow().clone()
    }

    /// Publish the cards for `entries`, regardless of their timestamps
    pub fn initialize_stream(&self, entries: &[StreamEntry]) {
        let cards = Self::cards(entries.iter());
        debug!("Initialized tracker stream with {} cards", cards.len());
        self.tx.send_replace(cards);
    }

    /// Publish the cards for entries already due at `now`
    ///
    /// Returns how many cards were published.
    pub fn update_stream(&self, entries: &[StreamEntry], now: Timestamp) -> usize {
        let cards = Self::cards(entries.iter().filter(|entry| entry.is_published(now)));
        let count = cards.len();

        // Skip waking observers when nothing changed
        let changed = self.tx.send_if_modified(|current| {
            if *current == cards {
                false
            } else {
                *current = cards;
                true
            }
        });
        if changed {
            debug!("Tracker stream updated: {} cards at {}", count, now);
        }
        count
    }

    fn cards<'a>(entries: impl Iterator<Item = &'a StreamEntry>) -> Vec<TrackerCard> {
        let mut cards: Vec<TrackerCard> = entries.filter_map(TrackerCard::from_entry).collect();
        cards.sort_by_key(TrackerCard::timestamp);
        cards
    }
}

impl Default for TrackerStream {
    fn default() -> Self {
        Self::new()
    }
}
