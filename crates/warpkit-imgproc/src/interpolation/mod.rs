//! Pixel interpolation methods for image transformations.
//!
//! This module provides the sampling kernels used when resampling rasters during
//! geometric transformations like warping, rotating or resizing.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between the four surrounding pixels
//! - **Bicubic**: Cubic convolution over the sixteen surrounding pixels, sharper than
//!   bilinear
//!
//! Coordinates that fall outside the source raster are not sampled; they receive the
//! [`FillColor`] chosen by the caller.

mod bicubic;
mod bilinear;
mod fill;

/// Grid generation and coordinate mapping utilities.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;
mod remap;

pub use fill::FillColor;
pub use interpolate::{interpolate_pixel, is_inside, InterpolationMode};
pub use remap::remap;
