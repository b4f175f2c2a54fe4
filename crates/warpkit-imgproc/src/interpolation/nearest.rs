use warpkit_image::Raster;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input raster.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The output pixel.
pub(crate) fn nearest_neighbor_interpolation(image: &Raster, u: f32, v: f32, pixel: &mut [u8]) {
    let (rows, cols) = (image.rows(), image.cols());
    let channels = image.num_channels();

    let iu = (u.round().max(0.0) as usize).min(cols - 1);
    let iv = (v.round().max(0.0) as usize).min(rows - 1);

    let base = (iv * cols + iu) * channels;
    pixel.copy_from_slice(&image.as_slice()[base..base + channels]);
}
