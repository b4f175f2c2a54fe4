#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the transformation engine.
pub mod error;

/// image reflection module.
pub mod flip;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// single-call translate, rotate, scale and reflect operations.
pub mod transform;

/// image geometric transformations module.
pub mod warp;

pub use error::TransformError;
