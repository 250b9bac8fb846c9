//! Error types for populate configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a populate configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file.
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing YAML.
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The user's home directory could not be determined.
    #[error("User home directory couldn't be determined")]
    HomeDirUnavailable,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
