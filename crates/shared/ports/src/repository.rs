use santa_core::{Destination, StreamEntry};

use crate::error::RepositoryResult;

/// Port for route and timeline data
pub trait SantaDataRepository: Send + Sync {
    /// All route stops, ordered by arrival
    fn load_destinations(&self) -> RepositoryResult<Vec<Destination>>;

    /// All timeline entries, in feed order
    fn load_stream_entries(&self) -> RepositoryResult<Vec<StreamEntry>>;
}
