use santa_core::{Destination, StreamEntry};
use santa_ports::{RepositoryResult, SantaDataRepository};
use std::path::Path;
use std::sync::RwLock;

use crate::{JsonRouteLoader, RouteData};

/// Repository serving route data held in memory
///
/// The data can be swapped wholesale with [`replace`](Self::replace) when
/// a newer route document arrives.
pub struct InMemoryRepository {
    data: RwLock<RouteData>,
}

impl InMemoryRepository {
    pub fn new(data: RouteData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        JsonRouteLoader::parse(json).map(Self::new)
    }

    pub fn from_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        JsonRouteLoader::load_file(path).map(Self::new)
    }

    pub fn replace(&self, data: RouteData) {
        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        *guard = data;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RouteData> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl SantaDataRepository for InMemoryRepository {
    fn load_destinations(&self) -> RepositoryResult<Vec<Destination>> {
        Ok(self.read().destinations.clone())
    }

    fn load_stream_entries(&self) -> RepositoryResult<Vec<StreamEntry>> {
        Ok(self.read().stream_entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_core::EntryType;

    #[test]
    fn test_replace() {
        let repo = InMemoryRepository::new(RouteData::default());
        assert!(repo.load_stream_entries().unwrap().is_empty());

        repo.replace(RouteData {
            destinations: vec![],
            stream_entries: vec![StreamEntry::new(1, EntryType::DidYouKnow, false, "a")],
        });
        assert_eq!(repo.load_stream_entries().unwrap().len(), 1);
    }
}
