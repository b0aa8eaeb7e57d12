use thiserror::Error;

/// Errors reading a remote-config parameter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No value or default for key: {0}")]
    Missing(String),

    #[error("Key {key} holds a {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Config source unavailable: {0}")]
    Unavailable(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors loading route data
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Failed to read route data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed route data: {0}")]
    Malformed(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Errors persisting the installed version code
#[derive(Error, Debug)]
pub enum VersionStoreError {
    #[error("Version store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored version code is corrupt: {0}")]
    Corrupt(String),
}

pub type VersionStoreResult<T> = std::result::Result<T, VersionStoreError>;
