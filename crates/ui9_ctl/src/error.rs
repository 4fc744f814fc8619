//! Control service error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtlError {
    /// Socket I/O failed
    #[error("Control socket I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Another reader already holds the events stream
    #[error("Events stream already has a reader")]
    Busy,

    /// A live server already answers on this socket
    #[error("Control service already running at {}", .0.display())]
    AlreadyRunning(PathBuf),

    /// The peer sent something that is not a valid reply
    #[error("Malformed reply: {0}")]
    Protocol(String),
}

/// Result type for control service operations
pub type Result<T> = std::result::Result<T, CtlError>;
