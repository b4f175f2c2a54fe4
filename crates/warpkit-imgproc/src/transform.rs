//! Single-call geometric transforms.
//!
//! Each operation borrows its source raster and returns a freshly allocated
//! destination; no source is ever modified. Calls share no state, so independent
//! rasters can be transformed from several threads at once.
//!
//! # Example
//!
//! ```
//! use warpkit_image::Raster;
//! use warpkit_imgproc::transform::{transform, TransformOptions, TransformSpec};
//!
//! let src = Raster::from_size_val([300, 300].into(), 3, 0).unwrap();
//!
//! let rotated = transform(
//!     &src,
//!     &TransformSpec::rotate(45.0),
//!     &TransformOptions::default().with_lossless(true),
//! )
//! .unwrap();
//!
//! assert_eq!(rotated.width(), 425);
//! assert_eq!(rotated.height(), 425);
//! ```

use warpkit_image::{ImageSize, Raster};

use crate::error::TransformError;
use crate::flip::{self, ReflectAxis};
use crate::interpolation::{FillColor, InterpolationMode};
use crate::parallel::ExecutionStrategy;
use crate::resize;
use crate::warp::{
    bounding_canvas_scaled, ceil_size, get_rotation_matrix2d, get_scaling_matrix2d,
    get_translation_matrix2d, warp_affine_new,
};

/// Per-call configuration shared by every transform.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformOptions {
    /// How source pixels are sampled.
    pub interpolation: InterpolationMode,
    /// Color of destination pixels without a source sample.
    pub fill: FillColor,
    /// Grow the canvas of a rotation so that nothing is cropped. Ignored by the
    /// other operations.
    pub lossless: bool,
    /// How the per-pixel work is scheduled.
    pub strategy: ExecutionStrategy,
}

impl TransformOptions {
    /// Sets the interpolation mode.
    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: FillColor) -> Self {
        self.fill = fill;
        self
    }

    /// Enables or disables canvas growth for rotations.
    pub fn with_lossless(mut self, lossless: bool) -> Self {
        self.lossless = lossless;
        self
    }

    /// Sets the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(feature = "serde")]
fn default_scale() -> f32 {
    1.0
}

/// A geometric transform request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum TransformSpec {
    /// Shift by `dx` columns and `dy` rows; the canvas keeps the source size.
    Translate {
        /// Horizontal shift, positive to the right.
        dx: f32,
        /// Vertical shift, positive downwards.
        dy: f32,
    },
    /// Rotate counter-clockwise by `angle` degrees.
    Rotate {
        /// Rotation angle in degrees, counter-clockwise as displayed.
        angle: f32,
        /// Pivot point; `None` pivots around the source center.
        #[cfg_attr(feature = "serde", serde(default))]
        center: Option<(f32, f32)>,
        /// Isotropic scale applied together with the rotation.
        #[cfg_attr(feature = "serde", serde(default = "default_scale"))]
        scale: f32,
    },
    /// Scale by `sx` horizontally and `sy` vertically.
    Scale {
        /// Horizontal scale factor.
        sx: f32,
        /// Vertical scale factor.
        sy: f32,
    },
    /// Mirror across an axis.
    Reflect {
        /// The mirror axis.
        axis: ReflectAxis,
    },
    /// Resample to an explicit size.
    Resize {
        /// Destination width in pixels.
        width: usize,
        /// Destination height in pixels.
        height: usize,
    },
}

impl TransformSpec {
    /// A rotation about the source center without scaling.
    pub fn rotate(angle: f32) -> Self {
        TransformSpec::Rotate {
            angle,
            center: None,
            scale: 1.0,
        }
    }
}

/// Applies `spec` to `src` and returns the transformed raster.
///
/// # Errors
///
/// See the individual operations: [`translate`], [`rotate_about`], [`scale`],
/// [`reflect`] and [`resize::resize`].
pub fn transform(
    src: &Raster,
    spec: &TransformSpec,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    log::debug!("transform {} with {:?}", src.size(), spec);

    match *spec {
        TransformSpec::Translate { dx, dy } => translate(src, dx, dy, options),
        TransformSpec::Rotate {
            angle,
            center,
            scale,
        } => rotate_about(src, angle, center, scale, options),
        TransformSpec::Scale { sx, sy } => scale(src, sx, sy, options),
        TransformSpec::Reflect { axis } => Ok(reflect(src, axis)),
        TransformSpec::Resize { width, height } => {
            resize::resize(src, ImageSize { width, height }, options)
        }
    }
}

/// Shifts the raster by `(dx, dy)` pixels.
///
/// The destination keeps the source size: content pushed past an edge is lost and
/// the uncovered band is painted with the fill color.
///
/// # Errors
///
/// Fails with [`TransformError::ChannelMismatch`] if the fill color does not match the
/// raster.
pub fn translate(
    src: &Raster,
    dx: f32,
    dy: f32,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    let m = get_translation_matrix2d(dx, dy);
    warp_affine_new(src, &m, src.size(), options)
}

/// Rotates the raster counter-clockwise by `angle` degrees around its center.
///
/// Without `options.lossless` the destination keeps the source size and the corners
/// are cropped. With it, the canvas grows to the bounding box of the rotated source:
/// the source is first moved to the center of the larger canvas and then rotated by
/// the full angle around that center.
///
/// # Errors
///
/// A non-finite angle fails with [`TransformError::DegenerateTransform`], or with
/// [`TransformError::InvalidDimensions`] when the canvas has to be sized first.
pub fn rotate(
    src: &Raster,
    angle: f32,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    rotate_about(src, angle, None, 1.0, options)
}

/// Rotates the raster by `angle` degrees around `center`, scaling by `scale`.
///
/// `center = None` pivots around the source center. Canvas growth only applies to
/// rotations about the source center; an explicit center keeps the source size.
pub fn rotate_about(
    src: &Raster,
    angle: f32,
    center: Option<(f32, f32)>,
    scale: f32,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    let size = src.size();
    let source_center = (
        (size.width as f32 - 1.0) / 2.0,
        (size.height as f32 - 1.0) / 2.0,
    );

    if !options.lossless || center.is_some() {
        if options.lossless {
            log::warn!(
                "lossless rotation needs the source center as pivot, keeping size {}",
                size
            );
        }
        let m = get_rotation_matrix2d(center.unwrap_or(source_center), angle, scale);
        return warp_affine_new(src, &m, size, options);
    }

    let canvas = bounding_canvas_scaled(size, angle, scale)?;
    log::debug!(
        "lossless rotation by {angle} grows {} to {}",
        size,
        canvas.size
    );

    // move the source onto the canvas center, then turn by the full angle
    let m = get_translation_matrix2d(canvas.offset.0, canvas.offset.1)
        .then(&get_rotation_matrix2d(canvas.center, angle, scale));

    warp_affine_new(src, &m, canvas.size, options)
}

/// Scales the raster by `sx` horizontally and `sy` vertically.
///
/// The destination size is `(ceil(width * sx), ceil(height * sy))`.
///
/// # Errors
///
/// Fails with [`TransformError::InvalidDimensions`] if a factor is zero, negative or
/// not finite, and with [`TransformError::TooLarge`] if the destination could not be
/// allocated.
pub fn scale(
    src: &Raster,
    sx: f32,
    sy: f32,
    options: &TransformOptions,
) -> Result<Raster, TransformError> {
    let size = ceil_size(src.width() as f32 * sx, src.height() as f32 * sy)?;
    log::debug!("scale {} by ({sx}, {sy}) to {}", src.size(), size);

    warp_affine_new(src, &get_scaling_matrix2d(sx, sy), size, options)
}

/// Mirrors the raster across `axis`.
///
/// Reflection reverses pixel indices directly and never interpolates, so reflecting
/// twice across the same axis restores the source exactly.
pub fn reflect(src: &Raster, axis: ReflectAxis) -> Raster {
    flip::reflect(src, axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpkit_image::ImageError;

    fn gradient(width: usize, height: usize, channels: usize) -> Result<Raster, TransformError> {
        let data = (0..width * height * channels)
            .map(|i| (i % 251) as u8)
            .collect();
        Ok(Raster::new([width, height].into(), channels, data)?)
    }

    #[test]
    fn translate_identity() -> Result<(), TransformError> {
        let src = gradient(7, 5, 3)?;
        let dst = translate(&src, 0.0, 0.0, &TransformOptions::default())?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn translate_shifts_content() -> Result<(), TransformError> {
        let src = Raster::new([3, 2].into(), 1, vec![1, 2, 3, 4, 5, 6])?;
        let dst = translate(&src, -1.0, 1.0, &TransformOptions::default())?;
        assert_eq!(dst.as_slice(), &[0, 0, 0, 2, 3, 0]);
        Ok(())
    }

    #[test]
    fn rotate_identity() -> Result<(), TransformError> {
        let src = gradient(6, 4, 1)?;
        for interpolation in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
            let options = TransformOptions::default().with_interpolation(interpolation);
            assert_eq!(rotate(&src, 0.0, &options)?, src);
        }
        Ok(())
    }

    #[test]
    fn rotate_half_turn_is_reflection_both() -> Result<(), TransformError> {
        let src = gradient(5, 4, 3)?;
        let rotated = rotate(&src, 180.0, &TransformOptions::default())?;
        assert_eq!(rotated, reflect(&src, ReflectAxis::Both));
        Ok(())
    }

    #[test]
    fn rotate_quarter_turn_lossless() -> Result<(), TransformError> {
        // 3x2 raster:
        // 0 1 2
        // 3 4 5
        let src = Raster::new([3, 2].into(), 1, vec![0, 1, 2, 3, 4, 5])?;
        let options = TransformOptions::default().with_lossless(true);

        // counter-clockwise: the right column becomes the top row
        let dst = rotate(&src, 90.0, &options)?;
        assert_eq!(dst.size(), ImageSize::from([2, 3]));
        assert_eq!(dst.as_slice(), &[2, 5, 1, 4, 0, 3]);

        let dst = rotate(&src, -90.0, &options)?;
        assert_eq!(dst.as_slice(), &[3, 0, 4, 1, 5, 2]);
        Ok(())
    }

    #[test]
    fn rotate_lossless_45() -> Result<(), TransformError> {
        let src = Raster::from_size_val([300, 300].into(), 3, 0)?;
        let dst = rotate(&src, 45.0, &TransformOptions::default().with_lossless(true))?;
        assert_eq!(dst.size(), ImageSize::from([425, 425]));
        assert_eq!(dst.num_channels(), 3);
        Ok(())
    }

    #[test]
    fn rotate_explicit_center_keeps_size() -> Result<(), TransformError> {
        let src = gradient(8, 6, 1)?;
        let options = TransformOptions::default().with_lossless(true);
        let dst = rotate_about(&src, 30.0, Some((0.0, 0.0)), 1.0, &options)?;
        assert_eq!(dst.size(), src.size());
        Ok(())
    }

    #[test]
    fn rotate_non_finite_angle() -> Result<(), TransformError> {
        let src = gradient(4, 4, 1)?;
        let res = rotate(&src, f32::NAN, &TransformOptions::default());
        assert!(matches!(
            res,
            Err(TransformError::DegenerateTransform { .. })
        ));
        Ok(())
    }

    #[test]
    fn scale_sizes() -> Result<(), TransformError> {
        let src = gradient(5, 3, 3)?;
        let options = TransformOptions::default();

        let dst = scale(&src, 0.5, 0.5, &options)?;
        assert_eq!(dst.size(), ImageSize::from([3, 2]));

        let dst = scale(&src, 2.0, 1.0, &options)?;
        assert_eq!(dst.size(), ImageSize::from([10, 3]));
        Ok(())
    }

    #[test]
    fn scale_up_nearest_replicates() -> Result<(), TransformError> {
        let src = Raster::new([2, 1].into(), 1, vec![10, 20])?;
        let dst = scale(&src, 2.0, 1.0, &TransformOptions::default())?;
        // destination x maps to source x / 2, rounded half away from zero
        assert_eq!(dst.as_slice(), &[10, 20, 20, 20]);
        Ok(())
    }

    #[test]
    fn scale_invalid() -> Result<(), TransformError> {
        let src = gradient(4, 4, 1)?;
        let options = TransformOptions::default();
        assert!(matches!(
            scale(&src, 0.0, 1.0, &options),
            Err(TransformError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            scale(&src, -1.0, 1.0, &options),
            Err(TransformError::InvalidDimensions { .. })
        ));
        Ok(())
    }

    #[test]
    fn huge_factors_fail_before_allocating() -> Result<(), TransformError> {
        let src = gradient(4, 4, 1)?;

        let res = scale(&src, 1e20, 1.0, &TransformOptions::default());
        assert!(matches!(res, Err(TransformError::TooLarge { .. })));

        let lossless = TransformOptions::default().with_lossless(true);
        let res = rotate_about(&src, 30.0, None, 1e20, &lossless);
        assert!(matches!(res, Err(TransformError::TooLarge { .. })));

        let res = transform(
            &src,
            &TransformSpec::Resize {
                width: usize::MAX,
                height: 2,
            },
            &TransformOptions::default(),
        );
        assert!(matches!(
            res,
            Err(TransformError::Image(ImageError::SizeOverflow(..)))
        ));
        Ok(())
    }

    #[test]
    fn transform_dispatch() -> Result<(), TransformError> {
        let src = gradient(4, 3, 1)?;
        let options = TransformOptions::default();

        let dst = transform(&src, &TransformSpec::Translate { dx: 0.0, dy: 0.0 }, &options)?;
        assert_eq!(dst, src);

        let dst = transform(
            &src,
            &TransformSpec::Reflect {
                axis: ReflectAxis::Vertical,
            },
            &options,
        )?;
        assert_eq!(dst, reflect(&src, ReflectAxis::Vertical));

        let dst = transform(&src, &TransformSpec::Scale { sx: 2.0, sy: 2.0 }, &options)?;
        assert_eq!(dst.size(), ImageSize::from([8, 6]));

        let dst = transform(
            &src,
            &TransformSpec::Resize {
                width: 2,
                height: 9,
            },
            &options,
        )?;
        assert_eq!(dst.size(), ImageSize::from([2, 9]));
        Ok(())
    }

    #[test]
    fn transform_fill_mismatch() -> Result<(), TransformError> {
        let src = gradient(4, 3, 3)?;
        let options = TransformOptions::default().with_fill(FillColor::Pixel(vec![1]));
        let res = transform(&src, &TransformSpec::rotate(10.0), &options);
        assert_eq!(
            res,
            Err(TransformError::ChannelMismatch {
                expected: 3,
                actual: 1
            })
        );
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn spec_from_json() -> Result<(), serde_json::Error> {
        let spec: TransformSpec = serde_json::from_str(r#"{"op": "rotate", "angle": 30.0}"#)?;
        assert_eq!(spec, TransformSpec::rotate(30.0));

        let options: TransformOptions =
            serde_json::from_str(r#"{"interpolation": "bilinear", "lossless": true}"#)?;
        assert_eq!(
            options,
            TransformOptions::default()
                .with_interpolation(InterpolationMode::Bilinear)
                .with_lossless(true)
        );
        Ok(())
    }
}
