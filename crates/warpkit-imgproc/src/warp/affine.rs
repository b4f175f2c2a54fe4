use warpkit_image::{ImageSize, Raster};

use crate::error::TransformError;
use crate::interpolation::{grid::meshgrid_from_fn, remap};
use crate::transform::TransformOptions;

use super::matrix::AffineMatrix;

/// Applies an affine transformation to an image.
///
/// Each destination pixel `(u, v)` is mapped back through the inverse of `m` to a
/// source coordinate, which is sampled with `options.interpolation`. Destination pixels
/// whose source coordinate falls outside `src` receive `options.fill`.
///
/// # Arguments
///
/// * `src` - The input raster with shape (height, width, channels).
/// * `dst` - The output raster with shape (new_height, new_width, channels).
/// * `m` - The 2x3 affine transformation matrix mapping source to destination.
/// * `options` - Interpolation, fill color and execution strategy.
///
/// # Errors
///
/// * [`TransformError::DegenerateTransform`] if `m` cannot be inverted.
/// * [`TransformError::ChannelMismatch`] if `dst` or the fill color do not match the
///   channel count of `src`.
///
/// # Example
///
/// ```
/// use warpkit_image::{ImageSize, Raster};
/// use warpkit_imgproc::transform::TransformOptions;
/// use warpkit_imgproc::warp::{warp_affine, AffineMatrix};
///
/// let src = Raster::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     3,
///     1u8,
/// ).unwrap();
///
/// let mut dst = Raster::from_size_val(src.size(), 3, 0u8).unwrap();
///
/// warp_affine(&src, &mut dst, &AffineMatrix::identity(), &TransformOptions::default()).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_affine(
    src: &Raster,
    dst: &mut Raster,
    m: &AffineMatrix,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = m.inverse()?;

    let (map_x, map_y) = meshgrid_from_fn(dst.cols(), dst.rows(), |x, y| {
        m_inv.transform_point(x as f32, y as f32)
    });

    remap(src, dst, &map_x, &map_y, options)
}

/// Applies an affine transformation and returns a newly allocated destination.
///
/// All validation happens before the destination is allocated, so a failing call
/// never produces a partially written raster.
///
/// # Arguments
///
/// * `src` - The input raster.
/// * `m` - The 2x3 affine transformation matrix mapping source to destination.
/// * `size` - The size of the destination raster.
/// * `options` - Interpolation, fill color and execution strategy.
pub fn warp_affine_new(
    src: &Raster,
    m: &AffineMatrix,
    size: ImageSize,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    if size.width == 0 || size.height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: size.width as i64,
            height: size.height as i64,
        });
    }

    m.inverse()?;
    options.fill.resolve(src.num_channels())?;

    log::trace!(
        "warp_affine {} -> {} with {:?}",
        src.size(),
        size,
        m.as_array()
    );

    let mut dst = Raster::from_size_val(size, src.num_channels(), 0)?;
    warp_affine(src, &mut dst, m, options)?;

    Ok(dst)
}
