pub mod config;
mod error;

pub use config::{
    AttributeSource, ConfigError, EnvSource, FileSource, ListDelimiter, PropertySource,
    ReadOnlyConfig, ReadOnlyConfigBuilder,
};
pub use error::Error;
