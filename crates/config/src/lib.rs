//! Santa Remote Config
//!
//! Key-value settings that can change without an app update. Values are
//! staged with [`RemoteConfig::fetch`] and become visible to readers
//! only after [`RemoteConfig::activate`], mirroring a fetch/activate
//! remote-config service.

mod store;
mod value;

pub use store::RemoteConfig;
pub use value::ConfigValue;

pub use santa_ports::{ConfigError, ConfigKey, ConfigResult, ConfigSource, keys};
