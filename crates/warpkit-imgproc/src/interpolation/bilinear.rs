use warpkit_image::Raster;

/// Kernel for bilinear interpolation
///
/// Blends the four pixels surrounding `(u, v)`. Coordinates are clamped to the raster,
/// so the last row and column are replicated when sampling past them.
///
/// # Arguments
///
/// * `image` - The input raster.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The output pixel.
pub(crate) fn bilinear_interpolation(image: &Raster, u: f32, v: f32, pixel: &mut [u8]) {
    let (rows, cols) = (image.rows(), image.cols());
    let channels = image.num_channels();

    let u = u.clamp(0.0, (cols - 1) as f32);
    let v = v.clamp(0.0, (rows - 1) as f32);

    let iu0 = u.trunc() as usize;
    let iv0 = v.trunc() as usize;

    let frac_u = u - iu0 as f32;
    let frac_v = v - iv0 as f32;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let base00 = (iv0 * cols + iu0) * channels;
    let base01 = (iv0 * cols + iu1) * channels;
    let base10 = (iv1 * cols + iu0) * channels;
    let base11 = (iv1 * cols + iu1) * channels;

    let data = image.as_slice();

    let p00 = &data[base00..base00 + channels];
    let p01 = &data[base01..base01 + channels];
    let p10 = &data[base10..base10 + channels];
    let p11 = &data[base11..base11 + channels];

    for (k, out) in pixel.iter_mut().enumerate() {
        let value = p00[k] as f32 * w00
            + p01[k] as f32 * w01
            + p10[k] as f32 * w10
            + p11[k] as f32 * w11;
        *out = value.round().clamp(0.0, 255.0) as u8;
    }
}
