/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the image size has a zero dimension.
    #[error("Invalid image size: width {0}, height {1}")]
    InvalidImageSize(usize, usize),

    /// Error when the channel count is not supported by a raster.
    #[error("Unsupported number of channels: {0} (expected 1, 3 or 4)")]
    UnsupportedChannelCount(usize),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the raster buffer would be too large to address.
    #[error("Raster of {0}x{1} pixels with {2} channels is too large")]
    SizeOverflow(usize, usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a pixel value does not have as many samples as the raster has channels.
    #[error("Pixel has {0} samples but the raster has {1} channels")]
    ChannelMismatch(usize, usize),
}
