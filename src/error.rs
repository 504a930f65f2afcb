use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the roconfig library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("read-only configuration requires a property source")]
    MissingSource,
}
