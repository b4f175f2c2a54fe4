use warpkit_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the transformation engine.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransformError {
    /// The requested output raster has a non-positive dimension.
    #[error("Invalid output dimensions: width {width}, height {height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: i64,
        /// Requested height in pixels.
        height: i64,
    },

    /// The requested output raster is too large to be allocated.
    #[error("Output raster of {width}x{height} pixels is too large")]
    TooLarge {
        /// Requested width in pixels.
        width: f32,
        /// Requested height in pixels.
        height: f32,
    },

    /// The affine matrix is singular and cannot be inverted.
    #[error("Affine transform is degenerate (determinant {determinant})")]
    DegenerateTransform {
        /// Determinant of the linear part of the matrix.
        determinant: f32,
    },

    /// A raster or pixel value does not have the expected number of channels.
    #[error("Expected {expected} channels, got {actual}")]
    ChannelMismatch {
        /// Channel count required by the operation.
        expected: usize,
        /// Channel count that was provided.
        actual: usize,
    },

    /// Error raised while building a raster.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error raised while scheduling the per-row work.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
