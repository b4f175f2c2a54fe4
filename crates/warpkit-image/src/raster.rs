use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of a raster in pixels.
///
/// # Examples
///
/// ```
/// use warpkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by the size, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of samples in a raster of this size with `channels` channels.
    ///
    /// Returns `None` when the buffer could not be addressed, i.e. when the count
    /// overflows or exceeds `isize::MAX` bytes.
    pub fn num_samples(&self, channels: usize) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(channels)
            .filter(|&n| n <= isize::MAX as usize)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Channel counts a raster can carry: gray, RGB and RGBA.
pub const SUPPORTED_CHANNELS: [usize; 3] = [1, 3, 4];

/// Represents an 8-bit raster with interleaved channels.
///
/// The samples are stored row-major with shape (H, W, C), where H is the height of the
/// raster, W is the width and C the number of channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    size: ImageSize,
    channels: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `channels` - The number of channels per pixel (1, 3 or 4).
    /// * `data` - The pixel data of the raster.
    ///
    /// # Errors
    ///
    /// If the size has a zero dimension, the channel count is not supported or the length
    /// of the pixel data does not match the raster size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use warpkit_image::{ImageSize, Raster};
    ///
    /// let raster = Raster::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    3,
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(raster.size().width, 10);
    /// assert_eq!(raster.size().height, 20);
    /// assert_eq!(raster.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::InvalidImageSize(size.width, size.height));
        }

        if !SUPPORTED_CHANNELS.contains(&channels) {
            return Err(ImageError::UnsupportedChannelCount(channels));
        }

        // check if the data length matches the image size
        let expected = size
            .num_samples(channels)
            .ok_or(ImageError::SizeOverflow(size.width, size.height, channels))?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Create a new raster with the given size and every sample set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warpkit_image::{ImageSize, Raster};
    ///
    /// let raster = Raster::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   },
    ///   1,
    ///   0u8,
    /// ).unwrap();
    ///
    /// assert_eq!(raster.as_slice().len(), 200);
    /// ```
    pub fn from_size_val(size: ImageSize, channels: usize, val: u8) -> Result<Self, ImageError> {
        let len = size
            .num_samples(channels)
            .ok_or(ImageError::SizeOverflow(size.width, size.height, channels))?;
        Raster::new(size, channels, vec![val; len])
    }

    /// Create a new raster where every pixel holds a copy of `pixel`.
    ///
    /// The number of channels is taken from the length of `pixel`.
    pub fn from_size_pixel(size: ImageSize, pixel: &[u8]) -> Result<Self, ImageError> {
        size.num_samples(pixel.len())
            .ok_or(ImageError::SizeOverflow(size.width, size.height, pixel.len()))?;
        Raster::new(size, pixel.len(), pixel.repeat(size.area()))
    }

    /// Get the size of the raster in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the raster.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the raster.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the raster.
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// Number of samples in one row of the raster.
    pub fn row_stride(&self) -> usize {
        self.size.width * self.channels
    }

    /// Get the raw samples of the raster.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the raw samples of the raster as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get the samples of the pixel at column `x` and row `y`.
    ///
    /// Returns `None` if the coordinates are outside the raster.
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let base = self.pixel_offset(x, y)?;
        self.data.get(base..base + self.channels)
    }

    /// Get the samples of the pixel at column `x` and row `y` as a mutable slice.
    pub fn get_pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let base = self.pixel_offset(x, y)?;
        let channels = self.channels;
        self.data.get_mut(base..base + channels)
    }

    /// Overwrite the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds or `pixel` does not have one sample per
    /// channel, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: &[u8]) -> Result<(), ImageError> {
        if pixel.len() != self.channels {
            return Err(ImageError::ChannelMismatch(pixel.len(), self.channels));
        }

        let (width, height) = (self.width(), self.height());
        let dst = self
            .get_pixel_mut(x, y)
            .ok_or(ImageError::PixelIndexOutOfBounds(x, y, width, height))?;
        dst.copy_from_slice(pixel);

        Ok(())
    }

    fn pixel_offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y * self.width() + x) * self.channels)
    }
}
