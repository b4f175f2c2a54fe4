use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};
use warpkit_image::Raster;

/// Axis a raster is mirrored across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReflectAxis {
    /// Mirror across the horizontal axis: rows are reversed, the y mapping is negated.
    Horizontal,
    /// Mirror across the vertical axis: columns are reversed, the x mapping is negated.
    Vertical,
    /// Mirror across both axes, equivalent to a half turn.
    Both,
}

/// Reflect the input raster across `axis`.
///
/// The reflection is a pure index permutation, so applying it twice restores the
/// source exactly.
///
/// # Arguments
///
/// * `src` - The input raster with shape (H, W, C).
/// * `axis` - The axis to mirror across.
///
/// # Returns
///
/// The reflected raster, with the same size as `src`.
///
/// # Example
///
/// ```
/// use warpkit_image::Raster;
/// use warpkit_imgproc::flip::{reflect, ReflectAxis};
///
/// let image = Raster::new([2, 3].into(), 1, vec![0, 1, 2, 3, 4, 5]).unwrap();
///
/// let flipped = reflect(&image, ReflectAxis::Vertical);
///
/// assert_eq!(flipped.as_slice(), &[1, 0, 3, 2, 5, 4]);
/// ```
pub fn reflect(src: &Raster, axis: ReflectAxis) -> Raster {
    match axis {
        ReflectAxis::Horizontal => mirror_rows(src),
        ReflectAxis::Vertical => mirror_columns(src),
        ReflectAxis::Both => mirror_columns(&mirror_rows(src)),
    }
}

fn mirror_columns(src: &Raster) -> Raster {
    let mut dst = src.clone();
    let channels = src.num_channels();
    let cols = src.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(src.row_stride())
        .for_each(|row| {
            let mut i = 0;
            let mut j = cols - 1;
            while i < j {
                for c in 0..channels {
                    row.swap(i * channels + c, j * channels + c);
                }
                i += 1;
                j -= 1;
            }
        });

    dst
}

fn mirror_rows(src: &Raster) -> Raster {
    let mut dst = src.clone();
    let stride = src.row_stride();

    dst.as_slice_mut()
        .par_chunks_exact_mut(stride)
        .zip(src.as_slice().par_chunks_exact(stride).rev())
        .for_each(|(dst_row, src_row)| dst_row.copy_from_slice(src_row));

    dst
}

#[cfg(test)]
mod tests {
    use super::{reflect, ReflectAxis};
    use warpkit_image::{ImageError, ImageSize, Raster};

    fn sample() -> Result<Raster, ImageError> {
        Raster::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            1,
            vec![0, 1, 2, 3, 4, 5],
        )
    }

    #[test]
    fn test_reflect_vertical_axis() -> Result<(), ImageError> {
        let flipped = reflect(&sample()?, ReflectAxis::Vertical);
        assert_eq!(flipped.as_slice(), &[1, 0, 3, 2, 5, 4]);
        Ok(())
    }

    #[test]
    fn test_reflect_horizontal_axis() -> Result<(), ImageError> {
        let flipped = reflect(&sample()?, ReflectAxis::Horizontal);
        assert_eq!(flipped.as_slice(), &[4, 5, 2, 3, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_reflect_both() -> Result<(), ImageError> {
        let flipped = reflect(&sample()?, ReflectAxis::Both);
        assert_eq!(flipped.as_slice(), &[5, 4, 3, 2, 1, 0]);
        Ok(())
    }

    #[test]
    fn test_reflect_keeps_channel_order() -> Result<(), ImageError> {
        let image = Raster::new([2, 1].into(), 3, vec![1, 2, 3, 4, 5, 6])?;
        let flipped = reflect(&image, ReflectAxis::Vertical);
        assert_eq!(flipped.as_slice(), &[4, 5, 6, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_reflect_involution() -> Result<(), ImageError> {
        let image = Raster::new([3, 3].into(), 3, (0..27).collect())?;
        for axis in [ReflectAxis::Horizontal, ReflectAxis::Vertical, ReflectAxis::Both] {
            assert_eq!(reflect(&reflect(&image, axis), axis), image);
        }
        Ok(())
    }
}
