use std::f32::consts::PI;

use warpkit_image::ImageSize;

use crate::error::TransformError;
use crate::flip::ReflectAxis;

/// Determinants at or below this magnitude are treated as singular.
pub const DEGENERATE_DETERMINANT: f32 = f32::EPSILON;

/// A 2x3 affine transformation matrix.
///
/// The coefficients are stored row-major as `[a, b, tx, c, d, ty]` and map a point
/// `(x, y)` to `(a * x + b * y + tx, c * x + d * y + ty)`. The implicit third row is
/// always `[0, 0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMatrix(pub [f32; 6]);

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 6]> for AffineMatrix {
    fn from(m: [f32; 6]) -> Self {
        Self(m)
    }
}

impl From<AffineMatrix> for [f32; 6] {
    fn from(m: AffineMatrix) -> Self {
        m.0
    }
}

impl AffineMatrix {
    /// The identity transform.
    pub const IDENTITY: AffineMatrix = AffineMatrix([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// Returns the identity transform.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the coefficients as `[a, b, tx, c, d, ty]`.
    pub fn as_array(&self) -> &[f32; 6] {
        &self.0
    }

    /// Applies the affine transformation to a point.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.0;
        let u = m[0] * x + m[1] * y + m[2];
        let v = m[3] * x + m[4] * y + m[5];
        (u, v)
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * m[4] - m[1] * m[3]
    }

    /// Returns true if the matrix cannot be inverted.
    ///
    /// Matrices with non-finite coefficients are reported as degenerate too.
    pub fn is_degenerate(&self) -> bool {
        let determinant = self.determinant();
        !(determinant.abs() > DEGENERATE_DETERMINANT)
    }

    /// Inverts the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DegenerateTransform`] for singular matrices.
    pub fn inverse(&self) -> Result<AffineMatrix, TransformError> {
        invert_affine_transform(self)
    }

    /// Returns the matrix that applies `self` first and `next` second.
    pub fn then(&self, next: &AffineMatrix) -> AffineMatrix {
        compose_affine_transforms(self, next)
    }
}

/// Sign convention for rotation angles.
///
/// Image coordinates have y pointing down, so the raw trigonometric rotation matrix
/// turns content clockwise on screen for positive angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationConvention {
    /// Positive angles rotate counter-clockwise as displayed. This is the canonical
    /// convention of [`get_rotation_matrix2d`].
    #[default]
    CounterClockwise,
    /// Positive angles rotate clockwise as displayed (the raw trigonometric matrix).
    Clockwise,
}

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix, or
/// [`TransformError::DegenerateTransform`] if the determinant is (close to) zero.
pub fn invert_affine_transform(m: &AffineMatrix) -> Result<AffineMatrix, TransformError> {
    if m.is_degenerate() {
        return Err(TransformError::DegenerateTransform {
            determinant: m.determinant(),
        });
    }

    let [a, b, c, d, e, f] = m.0;
    let inv_determinant = 1.0 / m.determinant();

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    Ok(AffineMatrix([new_a, new_b, new_c, new_d, new_e, new_f]))
}

/// Returns a 2x3 matrix translating points by `(dx, dy)`.
///
/// Positive `dx` moves content right, positive `dy` moves it down.
pub fn get_translation_matrix2d(dx: f32, dy: f32) -> AffineMatrix {
    AffineMatrix([1.0, 0.0, dx, 0.0, 1.0, dy])
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// Positive angles rotate counter-clockwise as displayed. The rotation matrix is
/// defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use warpkit_imgproc::warp::get_rotation_matrix2d;
///
/// let rotation_matrix = get_rotation_matrix2d((0.0, 0.0), 90.0, 1.0);
/// let (x, y) = rotation_matrix.transform_point(1.0, 0.0);
///
/// // the x axis turns towards the top of the image
/// assert!(x.abs() < 1e-6);
/// assert!((y + 1.0).abs() < 1e-6);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> AffineMatrix {
    get_rotation_matrix2d_with(center, angle, scale, RotationConvention::CounterClockwise)
}

/// Returns the raw trigonometric rotation matrix around a center point.
///
/// Positive angles rotate clockwise as displayed. This is the transpose of the linear
/// part of [`get_rotation_matrix2d`].
pub fn get_rotation_matrix2d_clockwise(center: (f32, f32), angle: f32, scale: f32) -> AffineMatrix {
    get_rotation_matrix2d_with(center, angle, scale, RotationConvention::Clockwise)
}

/// Returns a rotation matrix around `center` using the given sign convention.
pub fn get_rotation_matrix2d_with(
    center: (f32, f32),
    angle: f32,
    scale: f32,
    convention: RotationConvention,
) -> AffineMatrix {
    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let (a, b, c, d) = match convention {
        RotationConvention::CounterClockwise => (alpha, beta, -beta, alpha),
        RotationConvention::Clockwise => (alpha, -beta, beta, alpha),
    };

    // keep the center fixed
    let tx = center.0 - a * center.0 - b * center.1;
    let ty = center.1 - c * center.0 - d * center.1;

    AffineMatrix([a, b, tx, c, d, ty])
}

/// Returns a 2x3 matrix scaling points by `sx` horizontally and `sy` vertically.
///
/// A zero factor yields a singular matrix; it is accepted here and rejected when the
/// matrix is inverted.
pub fn get_scaling_matrix2d(sx: f32, sy: f32) -> AffineMatrix {
    AffineMatrix([sx, 0.0, 0.0, 0.0, sy, 0.0])
}

/// Returns the matrix mirroring a raster of the given size along `axis`.
///
/// The corrective translation keeps the mirrored pixel grid on top of the original
/// one, so pixel `(0, y)` swaps with `(width - 1, y)` and so on.
pub fn get_reflection_matrix2d(axis: ReflectAxis, size: ImageSize) -> AffineMatrix {
    let last_col = size.width as f32 - 1.0;
    let last_row = size.height as f32 - 1.0;
    match axis {
        ReflectAxis::Horizontal => AffineMatrix([1.0, 0.0, 0.0, 0.0, -1.0, last_row]),
        ReflectAxis::Vertical => AffineMatrix([-1.0, 0.0, last_col, 0.0, 1.0, 0.0]),
        ReflectAxis::Both => AffineMatrix([-1.0, 0.0, last_col, 0.0, -1.0, last_row]),
    }
}

/// Composes two affine transforms.
///
/// The result is equivalent to applying `first` and then `second`, i.e. the
/// homogeneous product `second * first` truncated back to 2x3.
pub fn compose_affine_transforms(first: &AffineMatrix, second: &AffineMatrix) -> AffineMatrix {
    let [a1, b1, t1, c1, d1, u1] = first.0;
    let [a2, b2, t2, c2, d2, u2] = second.0;

    AffineMatrix([
        a2 * a1 + b2 * c1,
        a2 * b1 + b2 * d1,
        a2 * t1 + b2 * u1 + t2,
        c2 * a1 + d2 * c1,
        c2 * b1 + d2 * d1,
        c2 * t1 + d2 * u1 + u2,
    ])
}
