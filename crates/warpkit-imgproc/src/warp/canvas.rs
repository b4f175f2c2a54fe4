use warpkit_image::ImageSize;

use crate::error::TransformError;

/// Slack subtracted before rounding a computed dimension up, so that float noise
/// such as `300.00002` does not add a whole row or column.
const DIM_EPS: f32 = 1e-3;

/// Destination canvas for a rotation that must not crop the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedCanvas {
    /// Size of the enlarged destination raster.
    pub size: ImageSize,
    /// Translation that moves the source center onto the canvas center before rotating.
    pub offset: (f32, f32),
    /// Center of the destination pixel grid; the rotation pivots around it.
    pub center: (f32, f32),
}

/// Channel count of the widest raster a computed canvas may have to hold.
const MAX_CHANNELS: usize = 4;

/// Rounds a computed extent up to a whole number of pixels.
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimensions`] if either extent is not a positive
/// finite number, and [`TransformError::TooLarge`] if a raster of that size could not
/// be addressed in memory.
pub(crate) fn ceil_size(width: f32, height: f32) -> Result<ImageSize, TransformError> {
    let w = (width - DIM_EPS).ceil();
    let h = (height - DIM_EPS).ceil();
    if !(w.is_finite() && h.is_finite() && w >= 1.0 && h >= 1.0) {
        return Err(TransformError::InvalidDimensions {
            width: if w.is_finite() { w as i64 } else { 0 },
            height: if h.is_finite() { h as i64 } else { 0 },
        });
    }

    // float to int casts saturate, the sample count check catches them
    let size = ImageSize {
        width: w as usize,
        height: h as usize,
    };
    if size.num_samples(MAX_CHANNELS).is_none() {
        return Err(TransformError::TooLarge {
            width: w,
            height: h,
        });
    }

    Ok(size)
}

/// Computes the smallest canvas holding a raster rotated about its own center.
///
/// The bounding box of a rotation repeats every 90 degrees, so the trigonometric
/// extremes are taken from `angle mod 90`:
///
/// ```text
/// width'  = ceil(width * cos(a) + height * sin(a))
/// height' = ceil(width * sin(a) + height * cos(a))
/// ```
///
/// In the second and fourth quadrants the box is the one of the first quadrant with
/// the roles of width and height exchanged, so a 90 degree turn of a 200x100 raster
/// yields a 100x200 canvas.
///
/// The reduced angle is only used for sizing; the rotation itself must use the
/// original angle.
///
/// # Arguments
///
/// * `size` - The size of the source raster.
/// * `angle` - The rotation angle in degrees.
///
/// # Example
///
/// ```
/// use warpkit_imgproc::warp::bounding_canvas;
///
/// let canvas = bounding_canvas([300, 300].into(), 45.0).unwrap();
/// assert_eq!(canvas.size.width, 425);
/// assert_eq!(canvas.size.height, 425);
/// ```
pub fn bounding_canvas(size: ImageSize, angle: f32) -> Result<RotatedCanvas, TransformError> {
    bounding_canvas_scaled(size, angle, 1.0)
}

/// Same as [`bounding_canvas`] for a rotation that also scales by `scale`.
pub fn bounding_canvas_scaled(
    size: ImageSize,
    angle: f32,
    scale: f32,
) -> Result<RotatedCanvas, TransformError> {
    let reduced = angle.rem_euclid(90.0).to_radians();
    let quadrant = (angle.rem_euclid(360.0) / 90.0).floor() as i64;

    let (width, height) = (size.width as f32, size.height as f32);
    let (w, h) = if quadrant % 2 == 1 {
        (height, width)
    } else {
        (width, height)
    };

    let (cos, sin) = (reduced.cos(), reduced.sin());
    let scale = scale.abs();
    let canvas_size = ceil_size(scale * (w * cos + h * sin), scale * (w * sin + h * cos))?;

    let (canvas_width, canvas_height) = (canvas_size.width as f32, canvas_size.height as f32);

    Ok(RotatedCanvas {
        size: canvas_size,
        offset: (
            canvas_width / 2.0 - width / 2.0,
            canvas_height / 2.0 - height / 2.0,
        ),
        center: ((canvas_width - 1.0) / 2.0, (canvas_height - 1.0) / 2.0),
    })
}
