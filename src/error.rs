//! Unified error type for albumart.

use thiserror::Error;

/// Errors that can occur while generating a cover.
#[derive(Debug, Error)]
pub enum CoverError {
    /// An I/O error occurred while writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The canvas could not be encoded.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// A gradient was built from too few stops.
    #[error("Invalid gradient: {0}")]
    InvalidGradient(String),

    /// The summary could not be serialized.
    #[error("Serialize error: {0}")]
    Serialize(String),
}
