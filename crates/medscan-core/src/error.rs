//! Error types for medscan-core operations.
//!
//! The [`Error`] enum covers the failure modes of the image buffer itself:
//! construction from a mismatched buffer and out-of-bounds pixel access.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or accessing image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when a buffer length does not match `width * height`, or
    /// when dimensions would overflow buffer size calculations.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}
