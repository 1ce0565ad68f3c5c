//! Error types for scenescope

use thiserror::Error;

/// Main error type for scenescope geometry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed bounds on axis {axis}: min {min} is greater than max {max}")]
    MalformedBounds { axis: usize, min: f64, max: f64 },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// Result type alias for scenescope operations
pub type Result<T> = std::result::Result<T, Error>;
