//! Read-only configuration views over key/value property sources.

mod attributes;
mod delimiter;
mod env;
mod error;
mod file;
mod readonly;
mod source;

pub use attributes::AttributeSource;
pub use delimiter::{split_list, ListDelimiter};
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::FileSource;
pub use readonly::{ReadOnlyConfig, ReadOnlyConfigBuilder};
pub use source::{Keys, PropertySource};
