use std::path::PathBuf;
use thiserror::Error;

/// Problems detected before any request is sent
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required field '{0}' is not set")]
    MissingField(String),

    #[error("Fields '{first}' and '{second}' cannot both be set")]
    ConflictingFields { first: String, second: String },

    #[error("Invalid title_pattern for group '{heading}': {source}")]
    InvalidPattern {
        heading: String,
        #[source]
        source: regex::Error,
    },

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
