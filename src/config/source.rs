use toml::Value;

use super::ConfigError;

/// Boxed iterator over the keys currently visible in a property source.
pub type Keys<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Capability set required from a backing key/value store.
///
/// A source only has to enumerate its keys and look values up; everything
/// else (emptiness, containment, list splitting, the read-only contract) is
/// derived by [`ReadOnlyConfig`](super::ReadOnlyConfig) on top of these two
/// methods. Errors raised by a source pass through the adapter unchanged.
pub trait PropertySource: Send + Sync + std::fmt::Debug {
    /// Iterates over all keys currently visible in the source.
    ///
    /// The iterator may be lazy; callers must not assume it is cheap to
    /// exhaust.
    fn keys(&self) -> Result<Keys<'_>, ConfigError>;

    /// Looks up the raw value stored under `key`.
    ///
    /// Returns `None` when the source does not know the key. A source that
    /// can hold an explicit "nothing" under a key is indistinguishable from
    /// one missing the key entirely.
    fn get(&self, key: &str) -> Result<Option<Value>, ConfigError>;
}
