use warpkit_image::Raster;

/// Free parameter of the Keys cubic convolution kernel, the Catmull-Rom spline.
const KEYS_A: f32 = -0.5;

/// Weight of a tap at distance `t` from the sample position.
fn cubic_weight(t: f32) -> f32 {
    let t = t.abs();
    if t <= 1.0 {
        ((KEYS_A + 2.0) * t - (KEYS_A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((KEYS_A * t - 5.0 * KEYS_A) * t + 8.0 * KEYS_A) * t - 4.0 * KEYS_A
    } else {
        0.0
    }
}

/// Weights of the four taps around a sample with fractional offset `frac`.
fn cubic_weights(frac: f32) -> [f32; 4] {
    [
        cubic_weight(frac + 1.0),
        cubic_weight(frac),
        cubic_weight(1.0 - frac),
        cubic_weight(2.0 - frac),
    ]
}

/// Kernel for bicubic interpolation
///
/// Convolves the 4x4 neighbourhood of `(u, v)` with the Keys kernel (`a = -0.5`).
/// Neighbour indices are clamped to the raster, replicating the border, and the
/// result is rounded and saturated to the `u8` range since the kernel overshoots.
///
/// # Arguments
///
/// * `image` - The input raster.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `pixel` - The output pixel.
pub(crate) fn bicubic_interpolation(image: &Raster, u: f32, v: f32, pixel: &mut [u8]) {
    let (rows, cols) = (image.rows(), image.cols());
    let channels = image.num_channels();

    let u = u.clamp(0.0, (cols - 1) as f32);
    let v = v.clamp(0.0, (rows - 1) as f32);

    let iu = u.floor() as usize;
    let iv = v.floor() as usize;

    let wu = cubic_weights(u - iu as f32);
    let wv = cubic_weights(v - iv as f32);

    // tap i sits at index base + i - 1
    let tap = |base: usize, i: usize, len: usize| (base + i).saturating_sub(1).min(len - 1);

    let data = image.as_slice();

    for (k, out) in pixel.iter_mut().enumerate() {
        let mut value = 0.0;
        for (j, wy) in wv.iter().enumerate() {
            let row = tap(iv, j, rows) * cols;
            for (i, wx) in wu.iter().enumerate() {
                let idx = (row + tap(iu, i, cols)) * channels + k;
                value += data[idx] as f32 * wx * wy;
            }
        }
        *out = value.round().clamp(0.0, 255.0) as u8;
    }
}
