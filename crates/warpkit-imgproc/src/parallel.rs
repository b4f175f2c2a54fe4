use rayon::prelude::*;
use thiserror::Error;

use warpkit_image::Raster;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The coordinate maps do not cover the destination raster.
    #[error("coordinate maps have {0} entries but the destination has {1} pixels")]
    SizeMismatch(usize, usize),
}

/// Controls how per-pixel work is scheduled.
///
/// Every strategy produces the same output; only the scheduling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool and process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to each destination pixel for grid sampling.
///
/// `map_x` and `map_y` hold, for every destination pixel in row-major order, the source
/// coordinate to sample. The closure receives that coordinate and the destination pixel.
///
/// # Errors
///
/// Fails if the maps do not have one entry per destination pixel, or if a local
/// thread pool cannot be built.
pub fn par_iter_rows_resample(
    dst: &mut Raster,
    map_x: &[f32],
    map_y: &[f32],
    strategy: ExecutionStrategy,
    f: impl Fn(f32, f32, &mut [u8]) + Send + Sync,
) -> Result<(), ParallelError> {
    let num_pixels = dst.size().area();
    if map_x.len() != num_pixels {
        return Err(ParallelError::SizeMismatch(map_x.len(), num_pixels));
    }
    if map_y.len() != num_pixels {
        return Err(ParallelError::SizeMismatch(map_y.len(), num_pixels));
    }

    let cols = dst.cols();
    let channels = dst.num_channels();
    let stride = dst.row_stride();
    let dst_slice = dst.as_slice_mut();

    let resample_row = |((dst_row, map_x_row), map_y_row): ((&mut [u8], &[f32]), &[f32])| {
        dst_row
            .chunks_exact_mut(channels)
            .zip(map_x_row.iter().zip(map_y_row.iter()))
            .for_each(|(dst_pixel, (&x, &y))| f(x, y, dst_pixel));
    };

    match strategy {
        ExecutionStrategy::Serial => {
            dst_slice
                .chunks_exact_mut(stride)
                .zip(map_x.chunks_exact(cols))
                .zip(map_y.chunks_exact(cols))
                .for_each(resample_row);
        }
        ExecutionStrategy::ParallelRows => {
            dst_slice
                .par_chunks_exact_mut(stride)
                .zip(map_x.par_chunks_exact(cols))
                .zip(map_y.par_chunks_exact(cols))
                .for_each(resample_row);
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst_slice
                    .par_chunks_exact_mut(stride)
                    .zip(map_x.par_chunks_exact(cols))
                    .zip(map_y.par_chunks_exact(cols))
                    .for_each(resample_row);
            });
        }
    }

    Ok(())
}
