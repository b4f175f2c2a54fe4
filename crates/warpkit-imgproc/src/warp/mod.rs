//! Geometric image transformations using affine warps.
//!
//! This module provides the building blocks of every transform in the crate:
//!
//! - Affine matrix construction (translation, rotation, scaling, reflection)
//! - Matrix composition and inversion
//! - Canvas sizing for rotations that must not crop the source
//! - The inverse-mapping warp that resamples a source raster
//!
//! # Rotation convention
//!
//! [`get_rotation_matrix2d`] is the canonical builder: positive angles rotate
//! counter-clockwise as displayed. [`get_rotation_matrix2d_clockwise`] exposes the raw
//! trigonometric matrix, which turns content clockwise for positive angles because
//! the y axis of an image points down.
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```no_run
//! use warpkit_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((127.5, 127.5), 45.0, 1.0);
//! // Use with warp_affine to rotate the image
//! ```

mod affine;
mod canvas;
mod matrix;

pub use affine::{warp_affine, warp_affine_new};
pub use canvas::{bounding_canvas, bounding_canvas_scaled, RotatedCanvas};
pub(crate) use canvas::ceil_size;
pub use matrix::{
    compose_affine_transforms, get_reflection_matrix2d, get_rotation_matrix2d,
    get_rotation_matrix2d_clockwise, get_rotation_matrix2d_with, get_scaling_matrix2d,
    get_translation_matrix2d, invert_affine_transform, AffineMatrix, RotationConvention,
    DEGENERATE_DETERMINANT,
};
