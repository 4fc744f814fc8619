//! Application error types

use thiserror::Error;
use ui9_config::ConfigError;
use ui9_ctl::CtlError;
use ui9_platform::PlatformError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Backend failure
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Configuration could not be read at startup
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Control service failure
    #[error(transparent)]
    Control(#[from] CtlError),
}

/// Result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;
