use dashmap::DashMap;
use log::{debug, info};
use santa_ports::{ConfigError, ConfigKey, ConfigResult, ConfigSource, keys};
use std::collections::HashMap;
use std::path::Path;

use crate::ConfigValue;

/// In-process remote config with fetch/activate semantics
///
/// Lookup order is: active value, then registered default. Fetched
/// values stay invisible until [`activate`](Self::activate) is called.
#[derive(Default)]
pub struct RemoteConfig {
    defaults: DashMap<String, ConfigValue>,
    active: DashMap<String, ConfigValue>,
    fetched: DashMap<String, ConfigValue>,
}

impl RemoteConfig {
    /// Create an empty config with no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with the in-app defaults for every known key
    pub fn with_app_defaults() -> Self {
        let config = Self::new();
        config.set_default(keys::TIME_OFFSET);
        config.set_default(keys::ROUTE_REFRESH_INTERVAL_MS);
        config.set_default(keys::DISABLE_TRACKER);
        config
    }

    /// Register the default for a key
    pub fn set_default<T: Into<ConfigValue>>(&self, key: ConfigKey<T>) {
        self.defaults.insert(key.name.to_string(), key.default.into());
    }

    /// Register several defaults at once
    pub fn set_defaults<I, K, V>(&self, defaults: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        for (name, value) in defaults {
            self.defaults.insert(name.into(), value.into());
        }
    }

    /// Stage values from a fetch; readers keep seeing the old values
    pub fn fetch<I, K, V>(&self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        for (name, value) in values {
            self.fetched.insert(name.into(), value.into());
        }
        debug!("Staged {} fetched config values", self.fetched.len());
    }

    /// Make staged values live
    ///
    /// Returns true if any active value changed.
    pub fn activate(&self) -> bool {
        // Take entries one by one; values staged meanwhile wait for the next call
        let names: Vec<String> = self.fetched.iter().map(|entry| entry.key().clone()).collect();

        let mut changed = false;
        for name in names {
            let Some((name, value)) = self.fetched.remove(&name) else {
                continue;
            };
            let previous = self.active.insert(name, value.clone());
            if previous.as_ref() != Some(&value) {
                changed = true;
            }
        }

        if changed {
            info!("Activated fetched config ({} active keys)", self.active.len());
        }
        changed
    }

    /// Build an active config from a flat JSON object, on top of app defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let values: HashMap<String, ConfigValue> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let config = Self::with_app_defaults();
        config.fetch(values);
        config.activate();
        Ok(config)
    }

    /// Load an active config from a JSON file
    pub fn load_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Raw lookup honoring active-then-default order
    pub fn get(&self, name: &str) -> ConfigResult<ConfigValue> {
        if let Some(value) = self.active.get(name) {
            return Ok(value.clone());
        }
        self.defaults
            .get(name)
            .map(|value| value.clone())
            .ok_or_else(|| ConfigError::Missing(name.to_string()))
    }

    fn mismatch(name: &str, expected: &'static str, found: &ConfigValue) -> ConfigError {
        ConfigError::TypeMismatch {
            key: name.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

impl ConfigSource for RemoteConfig {
    fn get_i64(&self, name: &str) -> ConfigResult<i64> {
        match self.get(name)? {
            ConfigValue::Int(v) => Ok(v),
            ConfigValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| Self::mismatch(name, "int", &ConfigValue::Text(s))),
            other => Err(Self::mismatch(name, "int", &other)),
        }
    }

    fn get_bool(&self, name: &str) -> ConfigResult<bool> {
        match self.get(name)? {
            ConfigValue::Bool(v) => Ok(v),
            ConfigValue::Text(s) => match s.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(Self::mismatch(name, "bool", &ConfigValue::Text(s))),
            },
            other => Err(Self::mismatch(name, "bool", &other)),
        }
    }

    fn get_string(&self, name: &str) -> ConfigResult<String> {
        match self.get(name)? {
            ConfigValue::Text(s) => Ok(s),
            ConfigValue::Int(v) => Ok(v.to_string()),
            ConfigValue::Bool(v) => Ok(v.to_string()),
        }
    }
}
