use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use warpkit_image::Raster;

/// Tolerance that keeps coordinates landing a hair left of or above the first pixel
/// in bounds, where float noise from rotations would otherwise discard them.
const BOUNDS_EPS: f32 = 1e-3;

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    #[default]
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic interpolation over a 4x4 neighbourhood
    Bicubic,
}

/// Returns true if the source coordinate `(u, v)` can be sampled from a raster with
/// `cols` columns and `rows` rows.
pub fn is_inside(u: f32, v: f32, cols: usize, rows: usize) -> bool {
    u >= -BOUNDS_EPS && u < cols as f32 && v >= -BOUNDS_EPS && v < rows as f32
}

/// Kernel for interpolating a pixel value
///
/// The caller is responsible for checking the coordinate with [`is_inside`]; kernels
/// clamp neighbour indices to the raster.
///
/// # Arguments
///
/// * `image` - The input raster with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `pixel` - The output pixel, one sample per channel.
pub fn interpolate_pixel(
    image: &Raster,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    pixel: &mut [u8],
) {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, pixel),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v, pixel),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, pixel),
    }
}
