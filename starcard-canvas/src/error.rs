//! Error types for starcard-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while drawing on a [`CardCanvas`](crate::CardCanvas).
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to parse CSS font string.
    #[error("Failed to parse font string: {0}")]
    FontParseError(String),

    /// Font data held no face fontdb could register.
    #[error("No font face could be parsed from {0} bytes of font data")]
    InvalidFontData(usize),

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// Invalid gradient stop offset (must be 0.0-1.0).
    #[error("Invalid gradient stop offset: {0} (must be 0.0-1.0)")]
    InvalidGradientStop(f64),

    /// Image bytes could not be decoded.
    #[error("Failed to decode image: {0}")]
    ImageDecodeError(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::PngError(err.to_string())
    }
}

impl From<image::ImageError> for CanvasError {
    fn from(err: image::ImageError) -> Self {
        CanvasError::ImageDecodeError(err.to_string())
    }
}
