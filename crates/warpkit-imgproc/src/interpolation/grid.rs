/// Create a meshgrid of source coordinates from a mapping function.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid
/// * `rows` - The number of rows indicating the height of the grid
/// * `f` - Maps a destination `(x, y)` to the source coordinate to sample
///
/// # Returns
///
/// A tuple of row-major vectors of length `rows * cols` with the x and y coordinates
pub fn meshgrid_from_fn(
    cols: usize,
    rows: usize,
    f: impl Fn(usize, usize) -> (f32, f32),
) -> (Vec<f32>, Vec<f32>) {
    let mut map_x = Vec::with_capacity(rows * cols);
    let mut map_y = Vec::with_capacity(rows * cols);

    for y in 0..rows {
        for x in 0..cols {
            let (u, v) = f(x, y);
            map_x.push(u);
            map_y.push(v);
        }
    }

    (map_x, map_y)
}
