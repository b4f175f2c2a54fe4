#![deny(missing_docs)]
//! Raster types for affine geometric transformations.

/// raster representation for geometric transformations.
pub mod raster;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::raster::{ImageSize, Raster};
