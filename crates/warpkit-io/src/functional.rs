use std::path::Path;

use warpkit_image::{ImageSize, Raster};

use crate::error::IoError;

/// Reads a raster from the given file path.
///
/// The format is guessed from the file contents and any format supported by the
/// image crate is accepted. Grayscale files produce one channel, files with an alpha
/// channel produce four, everything else is converted to three channel RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A raster containing the 8-bit pixel data.
///
/// # Errors
///
/// * [`IoError::FileDoesNotExist`] if nothing exists at `file_path`.
/// * [`IoError::CodecError`] if the file cannot be decoded.
pub fn read_raster(file_path: impl AsRef<Path>) -> Result<Raster, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let color = img.color();
    let raster = if color.has_alpha() {
        Raster::new(size, 4, img.into_rgba8().into_raw())?
    } else if !color.has_color() {
        Raster::new(size, 1, img.into_luma8().into_raw())?
    } else {
        Raster::new(size, 3, img.into_rgb8().into_raw())?
    };

    log::debug!(
        "read {} ({} channels) from {}",
        raster.size(),
        raster.num_channels(),
        file_path.display()
    );

    Ok(raster)
}

/// Writes a raster to the given file path.
///
/// The output format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path, e.g. `out.png`.
/// * `raster` - The raster to encode.
pub fn write_raster(file_path: impl AsRef<Path>, raster: &Raster) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let color = match raster.num_channels() {
        1 => image::ColorType::L8,
        3 => image::ColorType::Rgb8,
        4 => image::ColorType::Rgba8,
        n => return Err(IoError::UnsupportedLayout(n)),
    };

    image::save_buffer(
        file_path,
        raster.as_slice(),
        raster.width() as u32,
        raster.height() as u32,
        color,
    )?;

    log::debug!("wrote {} to {}", raster.size(), file_path.display());

    Ok(())
}
