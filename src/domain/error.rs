use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or resolving checker configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An interval field that is not a humantime duration
    #[error("Malformed duration in {field}: {value:?} ({source})")]
    MalformedDuration {
        /// Dotted document path, e.g. `checker.check_interval`
        field: String,
        /// Text as written
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    /// A worker-pool limit that is not strictly positive after resolution
    #[error("Invalid {field}: {value}. Must be positive, or 0 to use the number of CPUs")]
    InvalidParallelism {
        /// Dotted document path of the limit
        field: String,
        /// Limit after 0 was substituted
        value: i64,
    },

    /// An explicitly requested document does not exist
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The document could not be read or does not match its schema
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

impl ConfigError {
    /// Name of the offending document field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedDuration { field, .. } | Self::InvalidParallelism { field, .. } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(err.to_string())
    }
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
