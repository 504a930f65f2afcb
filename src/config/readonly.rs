use serde::de::DeserializeOwned;
use toml::Value;

use super::delimiter::{split_list, ListDelimiter};
use super::source::PropertySource;
use super::ConfigError;
use crate::Error;

/// Read-only configuration view over a [`PropertySource`].
///
/// The adapter derives emptiness and containment checks from the source's
/// `keys`/`get` capabilities, applies the list-delimiter policy to string
/// values on read, and rejects every mutation attempt with
/// [`ConfigError::ReadOnly`] no matter what the backing store would allow.
///
/// ## Example
///
/// ```
/// use roconfig::{AttributeSource, ReadOnlyConfig};
///
/// let mut attributes = AttributeSource::new();
/// attributes.set("greeting", "hello");
/// attributes.set("hosts", "alpha,beta,gamma");
///
/// let config = ReadOnlyConfig::builder()
///     .with_source(attributes)
///     .build()?;
///
/// assert!(config.contains_key("hosts")?);
/// let hosts: Vec<String> = config.get_as("hosts")?.unwrap();
/// assert_eq!(hosts, vec!["alpha", "beta", "gamma"]);
/// assert!(config.remove_property("greeting").is_err());
/// # Ok::<(), roconfig::Error>(())
/// ```
#[derive(Debug)]
pub struct ReadOnlyConfig<S> {
    source: S,
    delimiter: ListDelimiter,
}

impl ReadOnlyConfig<()> {
    /// Creates a new builder for constructing a read-only configuration.
    pub fn builder() -> ReadOnlyConfigBuilder<()> {
        ReadOnlyConfigBuilder {
            source: None,
            delimiter: ListDelimiter::default(),
        }
    }
}

impl<S: PropertySource> ReadOnlyConfig<S> {
    /// Checks whether the underlying source holds no keys at all.
    ///
    /// Probes the key iterator for a first element instead of collecting it,
    /// so a lazy source is not exhausted.
    pub fn is_empty(&self) -> Result<bool, ConfigError> {
        Ok(self.source.keys()?.next().is_none())
    }

    /// Checks whether `key` is stored in the underlying source.
    ///
    /// Containment is defined purely by lookup: a key is contained iff
    /// [`PropertySource::get`] returns a value for it.
    pub fn contains_key(&self, key: &str) -> Result<bool, ConfigError> {
        Ok(self.source.get(key)?.is_some())
    }

    /// Looks up `key` and applies the list-delimiter policy to the result.
    pub fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self
            .source
            .get(key)?
            .map(|value| self.handle_delimiters(value)))
    }

    /// Looks up `key` and deserializes the value into `T`.
    ///
    /// List splitting happens before deserialization, so a value stored as
    /// `"a,b,c"` can be read as a `Vec<String>`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.get(key)?
            .map(|value| value.try_into().map_err(ConfigError::DeserializeError))
            .transpose()
    }

    /// Rejects removal. The configuration is read-only, so this always
    /// returns [`ConfigError::ReadOnly`] and never touches the source.
    pub fn remove_property(&self, _key: &str) -> Result<(), ConfigError> {
        Err(ConfigError::ReadOnly)
    }

    /// Rejects insertion. The configuration is read-only, so this always
    /// returns [`ConfigError::ReadOnly`] and never touches the source.
    pub fn add_property(&self, _key: &str, _value: Value) -> Result<(), ConfigError> {
        Err(ConfigError::ReadOnly)
    }

    /// Applies the list-delimiter policy to a raw property value.
    ///
    /// With an enabled policy, string values are split on the configured
    /// delimiter: a multi-element result becomes an array of strings in
    /// split order, a single-element result collapses back to a scalar
    /// string. Non-string values, and all values under a disabled policy,
    /// pass through unchanged.
    pub fn handle_delimiters(&self, value: Value) -> Value {
        if !self.delimiter.is_enabled() {
            return value;
        }

        match value {
            Value::String(s) => {
                let mut elements = split_list(&s, self.delimiter.delimiter());
                if elements.len() > 1 {
                    Value::Array(elements.into_iter().map(Value::String).collect())
                } else {
                    Value::String(elements.pop().expect("split yields at least one element"))
                }
            }
            other => other,
        }
    }

    /// Returns the list-delimiter policy in effect.
    pub fn list_delimiter(&self) -> ListDelimiter {
        self.delimiter
    }

    /// Returns a reference to the wrapped property source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Builder for constructing a [`ReadOnlyConfig`].
///
/// The builder starts without a source (`ReadOnlyConfigBuilder<()>`) and
/// transitions to `ReadOnlyConfigBuilder<S>` when
/// [`with_source`](Self::with_source) is called.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ReadOnlyConfigBuilder<S> {
    source: Option<S>,
    delimiter: ListDelimiter,
}

impl ReadOnlyConfigBuilder<()> {
    /// Attaches the backing property source.
    pub fn with_source<S: PropertySource>(self, source: S) -> ReadOnlyConfigBuilder<S> {
        ReadOnlyConfigBuilder {
            source: Some(source),
            delimiter: self.delimiter,
        }
    }
}

impl<S> ReadOnlyConfigBuilder<S> {
    /// Sets the character used to split string values into lists.
    pub fn list_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = ListDelimiter::new(delimiter);
        self
    }

    /// Disables list splitting; string values pass through verbatim.
    pub fn disable_delimiter_parsing(mut self) -> Self {
        self.delimiter = ListDelimiter::disabled();
        self
    }

    /// Builds the read-only configuration.
    ///
    /// Returns an error if no property source was attached.
    pub fn build(self) -> Result<ReadOnlyConfig<S>, Error> {
        Ok(ReadOnlyConfig {
            source: self.source.ok_or(Error::MissingSource)?,
            delimiter: self.delimiter,
        })
    }
}
