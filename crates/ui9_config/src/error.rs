//! Config error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Config persistence errors.
///
/// Only I/O can fail; malformed values are resolved by fallback and never
/// show up here.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the temporary `.new` file failed
    #[error("Failed to write config {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temporary file could not be moved over the config
    #[error("Failed to replace config {}: {}", .path.display(), .source)]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;
