//! In-memory attribute store source.

use std::collections::BTreeMap;

use toml::Value;

use super::source::{Keys, PropertySource};
use super::ConfigError;

/// A property source backed by an in-memory attribute map.
///
/// The owner can freely mutate the store through [`set`](Self::set) and
/// [`remove`](Self::remove); a [`ReadOnlyConfig`](super::ReadOnlyConfig)
/// wrapping it still rejects every mutation. This models externally owned
/// attributes (a request or session scope) that the configuration layer may
/// read but never change.
#[derive(Debug, Default, Clone)]
pub struct AttributeSource {
    attributes: BTreeMap<String, Value>,
}

impl AttributeSource {
    /// Creates an empty attribute store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Removes the value stored under `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    /// Drops all stored attributes.
    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    /// Returns the number of stored attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns whether the store holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl PropertySource for AttributeSource {
    fn keys(&self) -> Result<Keys<'_>, ConfigError> {
        Ok(Box::new(self.attributes.keys().cloned()))
    }

    fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self.attributes.get(key).cloned())
    }
}
