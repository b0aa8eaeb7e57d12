use crate::error::VersionStoreResult;

/// Port for remembering which app version last ran
pub trait VersionStore: Send + Sync {
    /// The version code stored by the previous run, if any
    fn load(&self) -> VersionStoreResult<Option<u32>>;

    fn store(&self, version_code: u32) -> VersionStoreResult<()>;
}

/// Port for scheduling a rebuild of the searchable app index
pub trait IndexRefresher: Send + Sync {
    fn enqueue_refresh(&self);
}
