//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// No drawable surface could be acquired
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The input stream closed
    #[error("Event stream closed: {0}")]
    EventStream(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_capability() {
        assert_eq!(
            PlatformError::SurfaceUnavailable("0x0".into()).to_string(),
            "Surface unavailable: 0x0"
        );
        assert_eq!(
            PlatformError::EventStream("script closed".into()).to_string(),
            "Event stream closed: script closed"
        );
    }
}
