//! Configuration loading errors.

use thiserror::Error;

/// Error raised while loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
