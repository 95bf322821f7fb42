//! Error types for wheel resolution and configuration

use thiserror::Error;

/// Wheel errors
#[derive(Debug, Error)]
pub enum WheelError {
    /// Inputs the resolver cannot produce a meaningful outcome for
    /// (no segments, non-finite angles, index outside the layout).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration document could not be decoded
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WheelError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Is this the resolver's configuration error?
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

/// Result type for wheel operations
pub type WheelResult<T> = Result<T, WheelError>;
