//! Installed-version tracking

use log::{debug, info};
use santa_ports::{VersionStore, VersionStoreError, VersionStoreResult};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Detects the first run after a new version is installed
pub struct UpgradeDetector {
    store: Arc<dyn VersionStore>,
    current_version: u32,
}

impl UpgradeDetector {
    pub fn new(store: Arc<dyn VersionStore>, current_version: u32) -> Self {
        Self {
            store,
            current_version,
        }
    }

    pub fn current_version(&self) -> u32 {
        self.current_version
    }

    /// Compare the stored version with the running one and record the latter
    ///
    /// A first run (nothing stored) counts as a change.
    pub fn has_version_code_changed(&self) -> VersionStoreResult<bool> {
        let previous = self.store.load()?;
        if previous == Some(self.current_version) {
            debug!("Version code unchanged ({})", self.current_version);
            return Ok(false);
        }

        self.store.store(self.current_version)?;
        info!(
            "Version code changed: {:?} -> {}",
            previous, self.current_version
        );
        Ok(true)
    }
}

/// Version store kept in a one-line text file
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionStore for FileVersionStore {
    fn load(&self) -> VersionStoreResult<Option<u32>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        text.trim()
            .parse()
            .map(Some)
            .map_err(|_| VersionStoreError::Corrupt(text.trim().to_string()))
    }

    fn store(&self, version_code: u32) -> VersionStoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, format!("{}\n", version_code))?;
        Ok(())
    }
}

/// Version store held in memory, for tests and ephemeral runs
#[derive(Default)]
pub struct InMemoryVersionStore {
    version: Mutex<Option<u32>>,
}

impl InMemoryVersionStore {
    pub fn new(version: Option<u32>) -> Self {
        Self {
            version: Mutex::new(version),
        }
    }
}

impl VersionStore for InMemoryVersionStore {
    fn load(&self) -> VersionStoreResult<Option<u32>> {
        Ok(*self.version.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn store(&self, version_code: u32) -> VersionStoreResult<()> {
        *self.version.lock().unwrap_or_else(|e| e.into_inner()) = Some(version_code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_counts_as_change() {
        let detector = UpgradeDetector::new(Arc::new(InMemoryVersionStore::default()), 3);
        assert!(detector.has_version_code_changed().unwrap());
        assert!(!detector.has_version_code_changed().unwrap());
    }

    #[test]
    fn test_upgrade_and_downgrade() {
        let store = Arc::new(InMemoryVersionStore::new(Some(3)));
        assert!(!UpgradeDetector::new(store.clone(), 3).has_version_code_changed().unwrap());
        assert!(UpgradeDetector::new(store.clone(), 4).has_version_code_changed().unwrap());
        assert_eq!(store.load().unwrap(), Some(4));
        assert!(UpgradeDetector::new(store.clone(), 2).has_version_code_changed().unwrap());
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileVersionStore::new(dir.path().join("state").join("version"));
        assert_eq!(store.load().unwrap(), None);

        store.store(17).unwrap();
        assert_eq!(store.load().unwrap(), Some(17));
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "17\n"
        );
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version");
        std::fs::write(&path, "seventeen").unwrap();

        let store = FileVersionStore::new(path);
        assert!(matches!(store.load(), Err(VersionStoreError::Corrupt(s)) if s == "seventeen"));
    }
}
