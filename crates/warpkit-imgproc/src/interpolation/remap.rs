use crate::error::TransformError;
use crate::parallel;
use crate::transform::TransformOptions;

use super::interpolate::{interpolate_pixel, is_inside};
use warpkit_image::Raster;

/// Apply generic geometric transformation to an image.
///
/// Every destination pixel `(x, y)` is pulled from the source coordinate
/// `(map_x[i], map_y[i])`, with `i = y * cols + x`. Coordinates outside the source are
/// painted with `options.fill`.
///
/// # Arguments
///
/// * `src` - The input raster with shape (height, width, C).
/// * `dst` - The output raster with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `options` - Interpolation, fill color and execution strategy.
///
/// # Errors
///
/// * The source and destination must have the same number of channels.
/// * The fill color must match the channel count.
/// * The maps must have one entry per destination pixel.
pub fn remap(
    src: &Raster,
    dst: &mut Raster,
    map_x: &[f32],
    map_y: &[f32],
    options: &TransformOptions,
) -> Result<(), TransformError> {
    if src.num_channels() != dst.num_channels() {
        return Err(TransformError::ChannelMismatch {
            expected: src.num_channels(),
            actual: dst.num_channels(),
        });
    }

    let fill = options.fill.resolve(dst.num_channels())?;
    let (cols, rows) = (src.cols(), src.rows());
    let interpolation = options.interpolation;

    parallel::par_iter_rows_resample(dst, map_x, map_y, options.strategy, |x, y, dst_pixel| {
        if is_inside(x, y, cols, rows) {
            interpolate_pixel(src, x, y, interpolation, dst_pixel);
        } else {
            dst_pixel.copy_from_slice(&fill);
        }
    })?;

    Ok(())
}
