use approx::assert_relative_eq;
use rand::Rng;

use warpkit_image::{ImageSize, Raster};
use warpkit_imgproc::flip::ReflectAxis;
use warpkit_imgproc::interpolation::{FillColor, InterpolationMode};
use warpkit_imgproc::parallel::ExecutionStrategy;
use warpkit_imgproc::transform::{reflect, rotate, translate, TransformOptions};
use warpkit_imgproc::warp::{
    bounding_canvas, compose_affine_transforms, get_rotation_matrix2d, get_translation_matrix2d,
};
use warpkit_imgproc::TransformError;

fn random_raster(width: usize, height: usize, channels: usize) -> Result<Raster, TransformError> {
    let mut rng = rand::rng();
    let data = (0..width * height * channels).map(|_| rng.random()).collect();
    Ok(Raster::new([width, height].into(), channels, data)?)
}

#[test]
fn test_identity_transforms() -> Result<(), TransformError> {
    let src = random_raster(33, 17, 3)?;
    let options = TransformOptions::default();

    assert_eq!(rotate(&src, 0.0, &options)?, src);
    assert_eq!(translate(&src, 0.0, 0.0, &options)?, src);
    Ok(())
}

#[test]
fn test_translate_round_trip_discloses_loss() -> Result<(), TransformError> {
    let (width, height) = (20isize, 12isize);
    let src = random_raster(width as usize, height as usize, 3)?;
    let fill = [7u8, 8, 9];
    let options = TransformOptions::default().with_fill(FillColor::Pixel(fill.to_vec()));

    for (dx, dy) in [(5isize, 3isize), (-5, -3), (5, -3), (-5, 3), (0, 4), (-7, 0)] {
        let shifted = translate(&src, dx as f32, dy as f32, &options)?;
        let back = translate(&shifted, -dx as f32, -dy as f32, &options)?;

        // a pixel survives iff its shifted position stayed on the canvas
        let preserved_x = dx.min(0).abs()..width - dx.max(0);
        let preserved_y = dy.min(0).abs()..height - dy.max(0);

        for y in 0..height {
            for x in 0..width {
                let pixel = back.get_pixel(x as usize, y as usize);
                if preserved_x.contains(&x) && preserved_y.contains(&y) {
                    assert_eq!(
                        pixel,
                        src.get_pixel(x as usize, y as usize),
                        "shift ({dx}, {dy}): pixel ({x}, {y}) was not preserved"
                    );
                } else {
                    assert_eq!(
                        pixel,
                        Some(&fill[..]),
                        "shift ({dx}, {dy}): pixel ({x}, {y}) should be fill"
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_lossless_rotation_containment() -> Result<(), TransformError> {
    let size = ImageSize {
        width: 37,
        height: 21,
    };

    for angle in [-170.0f32, -90.0, -33.0, 0.0, 12.5, 45.0, 90.0, 135.0, 200.0, 271.0, 359.0] {
        let canvas = bounding_canvas(size, angle)?;

        let theta = angle.to_radians();
        let (cos, sin) = (theta.cos().abs(), theta.sin().abs());
        let min_width = size.width as f32 * cos + size.height as f32 * sin;
        let min_height = size.width as f32 * sin + size.height as f32 * cos;
        assert!(canvas.size.width as f32 >= min_width - 1e-3, "angle {angle}");
        assert!(canvas.size.height as f32 >= min_height - 1e-3, "angle {angle}");

        let m = get_translation_matrix2d(canvas.offset.0, canvas.offset.1)
            .then(&get_rotation_matrix2d(canvas.center, angle, 1.0));

        for y in 0..size.height {
            for x in 0..size.width {
                let (u, v) = m.transform_point(x as f32, y as f32);
                assert!(
                    u > -0.5 && u < canvas.size.width as f32 - 0.5,
                    "angle {angle}: ({x}, {y}) -> u = {u}"
                );
                assert!(
                    v > -0.5 && v < canvas.size.height as f32 - 0.5,
                    "angle {angle}: ({x}, {y}) -> v = {v}"
                );
            }
        }

        let dst = rotate(
            &Raster::from_size_val(size, 1, 1)?,
            angle,
            &TransformOptions::default().with_lossless(true),
        )?;
        assert_eq!(dst.size(), canvas.size);
    }
    Ok(())
}

#[test]
fn test_rotation_composition() {
    let center = (150.0, 90.0);
    let m = compose_affine_transforms(
        &get_rotation_matrix2d(center, 30.0, 1.0),
        &get_rotation_matrix2d(center, 15.0, 1.0),
    );
    let expected = get_rotation_matrix2d(center, 45.0, 1.0);

    for (x, y) in [(0.0, 0.0), (299.0, 0.0), (12.0, 170.0), (150.0, 90.0)] {
        let (u, v) = m.transform_point(x, y);
        let (eu, ev) = expected.transform_point(x, y);
        assert_relative_eq!(u, eu, epsilon = 1e-3);
        assert_relative_eq!(v, ev, epsilon = 1e-3);
    }
}

#[test]
fn test_reflection_involution() -> Result<(), TransformError> {
    let src = random_raster(31, 8, 4)?;
    for axis in [ReflectAxis::Horizontal, ReflectAxis::Vertical, ReflectAxis::Both] {
        assert_eq!(reflect(&reflect(&src, axis), axis), src);
    }
    Ok(())
}

#[test]
fn test_rotate_45_lossless_scenario() -> Result<(), TransformError> {
    let src = Raster::from_size_val([300, 300].into(), 3, 0)?;
    let dst = rotate(&src, 45.0, &TransformOptions::default().with_lossless(true))?;

    assert_eq!(dst.size().width, 425);
    assert_eq!(dst.size().height, 425);

    let canvas = bounding_canvas(src.size(), 45.0)?;
    let m = get_translation_matrix2d(canvas.offset.0, canvas.offset.1)
        .then(&get_rotation_matrix2d(canvas.center, 45.0, 1.0));

    for (x, y) in [(0.0, 0.0), (299.0, 0.0), (0.0, 299.0), (299.0, 299.0)] {
        let (u, v) = m.transform_point(x, y);
        assert!((0.0..=424.0).contains(&u), "corner ({x}, {y}) -> u = {u}");
        assert!((0.0..=424.0).contains(&v), "corner ({x}, {y}) -> v = {v}");
    }
    Ok(())
}

#[test]
fn test_lossless_rotation_keeps_every_pixel() -> Result<(), TransformError> {
    // a white raster rotated onto a black canvas keeps its full mass
    let src = Raster::from_size_val([40, 40].into(), 1, 255)?;
    let dst = rotate(&src, 30.0, &TransformOptions::default().with_lossless(true))?;

    let lit = dst.as_slice().iter().filter(|&&p| p == 255).count();
    let ratio = lit as f32 / src.size().area() as f32;
    assert!((0.97..=1.03).contains(&ratio), "ratio {ratio}");

    // the clipped variant loses the corners
    let clipped = rotate(&src, 30.0, &TransformOptions::default())?;
    let lit = clipped.as_slice().iter().filter(|&&p| p == 255).count();
    assert!(lit < src.size().area());
    Ok(())
}

#[test]
fn test_strategies_agree() -> Result<(), TransformError> {
    let src = random_raster(64, 48, 3)?;
    let base = TransformOptions::default()
        .with_interpolation(InterpolationMode::Bilinear)
        .with_lossless(true);

    let serial = rotate(&src, 23.0, &base.clone().with_strategy(ExecutionStrategy::Serial))?;
    let rows = rotate(&src, 23.0, &base.clone().with_strategy(ExecutionStrategy::ParallelRows))?;
    let fixed = rotate(&src, 23.0, &base.with_strategy(ExecutionStrategy::Fixed(3)))?;

    assert_eq!(serial, rows);
    assert_eq!(serial, fixed);
    Ok(())
}

#[test]
fn test_parallel_calls_share_nothing() -> Result<(), TransformError> {
    let src = random_raster(50, 30, 3)?;
    let options = TransformOptions::default().with_lossless(true);
    let expected = rotate(&src, 60.0, &options)?;

    let results = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| rotate(&src, 60.0, &options)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("transform thread panicked"))
            .collect::<Result<Vec<_>, _>>()
    })?;

    for dst in results {
        assert_eq!(dst, expected);
    }
    Ok(())
}
