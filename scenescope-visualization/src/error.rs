//! Error types for figure composition and rendering

use thiserror::Error;

/// Errors that can occur while composing or rendering a figure
#[derive(Error, Debug)]
pub enum VisualizationError {
    #[error(transparent)]
    Geometry(#[from] scenescope_core::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for visualization operations
pub type Result<T> = std::result::Result<T, VisualizationError>;
