//! Top-level error type.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The image file is missing or could not be decoded.
    #[error("Failed to open image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pixel buffer length does not match the grid dimensions.
    #[error("Pixel buffer has {actual} pixels, expected {expected}")]
    Grid { expected: usize, actual: usize },

    #[error("Failed to write to terminal: {0}")]
    Io(#[from] std::io::Error),
}
