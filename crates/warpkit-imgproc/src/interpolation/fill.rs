use crate::error::TransformError;

/// Constant color written to destination pixels that have no source sample.
///
/// Translations and rotations expose regions of the destination that no source pixel
/// maps to; those regions are painted with the fill color instead of being sampled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FillColor {
    /// Every channel set to zero (black, fully transparent for RGBA).
    #[default]
    Zero,
    /// The same value in every channel.
    Gray(u8),
    /// An explicit pixel; it must have one sample per channel of the raster.
    Pixel(Vec<u8>),
}

impl FillColor {
    /// Expand the fill color to a pixel with `channels` samples.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ChannelMismatch`] if an explicit pixel does not have
    /// `channels` samples.
    pub fn resolve(&self, channels: usize) -> Result<Vec<u8>, TransformError> {
        match self {
            FillColor::Zero => Ok(vec![0; channels]),
            FillColor::Gray(value) => Ok(vec![*value; channels]),
            FillColor::Pixel(pixel) if pixel.len() == channels => Ok(pixel.clone()),
            FillColor::Pixel(pixel) => Err(TransformError::ChannelMismatch {
                expected: channels,
                actual: pixel.len(),
            }),
        }
    }
}
