//! Configuration error types.
//!
//! Only loading and resolving configuration can fail. A running simulation
//! never returns errors: missing fragment species are skipped and an empty
//! projectile pool grows on demand.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The spawner's root species is not in the catalog.
    UnknownSpecies { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse(err) => write!(f, "invalid config: {}", err),
            ConfigError::UnknownSpecies { name } => {
                write!(f, "root species '{}' is not defined in the catalog", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;
