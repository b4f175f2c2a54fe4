#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level raster reading and writing functions.
///
/// See [`functional::read_raster`] for automatic format detection.
pub mod functional;

pub use error::IoError;
