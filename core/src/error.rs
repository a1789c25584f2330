//! Error types for the killport-core library.

use thiserror::Error;

/// Result type alias for killport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during port discovery and process termination.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied port or PID was empty or not a valid integer.
    #[error("{0}")]
    InvalidInput(String),

    /// The listing utility could not be run or exited with an unexpected status.
    #[error("failed to execute lsof: {0}")]
    EnumerationFailed(String),

    /// The OS rejected a single signal delivery.
    #[error("failed to send {signal} to process {pid}: {reason}")]
    SignalFailed {
        pid: i32,
        signal: String,
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}

impl Error {
    /// Whether this error came from bad caller input rather than the system.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
