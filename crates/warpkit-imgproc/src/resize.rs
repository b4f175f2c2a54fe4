use warpkit_image::{ImageSize, Raster};

use crate::error::TransformError;
use crate::interpolation::{grid::meshgrid_from_fn, remap};
use crate::transform::TransformOptions;

/// Resize an image to a new size.
///
/// Pixel centers are aligned: destination pixel `x` samples the source at
/// `(x + 0.5) * width / new_width - 0.5`, clamped to the source, and likewise for `y`.
/// Both borders of the source stay on the borders of the result, so nothing is
/// shifted and no fill color is ever used. It supports any number of channels.
///
/// # Arguments
///
/// * `src` - The input raster.
/// * `new_size` - The size of the output raster.
/// * `options` - Interpolation and execution strategy.
///
/// # Returns
///
/// The resized raster with the new size.
///
/// # Errors
///
/// Fails with [`TransformError::InvalidDimensions`] if `new_size` has a zero dimension.
///
/// # Example
///
/// ```
/// use warpkit_image::{ImageSize, Raster};
/// use warpkit_imgproc::interpolation::InterpolationMode;
/// use warpkit_imgproc::resize::resize;
/// use warpkit_imgproc::transform::TransformOptions;
///
/// let image = Raster::from_size_val([4, 5].into(), 3, 0).unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let options = TransformOptions::default().with_interpolation(InterpolationMode::Bilinear);
/// let image_resized = resize(&image, new_size, &options).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize(
    src: &Raster,
    new_size: ImageSize,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    if new_size.width == 0 || new_size.height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: new_size.width as i64,
            height: new_size.height as i64,
        });
    }

    if new_size == src.size() {
        return Ok(src.clone());
    }

    options.fill.resolve(src.num_channels())?;
    let mut dst = Raster::from_size_val(new_size, src.num_channels(), 0)?;
    log::debug!("resize {} to {}", src.size(), new_size);

    let ratio_x = src.width() as f32 / new_size.width as f32;
    let ratio_y = src.height() as f32 / new_size.height as f32;
    let (max_x, max_y) = ((src.width() - 1) as f32, (src.height() - 1) as f32);

    let (map_x, map_y) = meshgrid_from_fn(new_size.width, new_size.height, |x, y| {
        (
            ((x as f32 + 0.5) * ratio_x - 0.5).clamp(0.0, max_x),
            ((y as f32 + 0.5) * ratio_y - 0.5).clamp(0.0, max_y),
        )
    });

    remap(src, &mut dst, &map_x, &map_y, options)?;

    Ok(dst)
}
