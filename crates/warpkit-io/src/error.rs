/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the raster from the decoded pixels.
    #[error("Failed to create raster. {0}")]
    RasterCreationError(#[from] warpkit_image::ImageError),

    /// Error to decode or encode the image file.
    #[error("Failed to decode or encode the image. {0}")]
    CodecError(#[from] image::ImageError),

    /// The raster cannot be stored with the requested file format.
    #[error("Unsupported raster layout for writing: {0} channels")]
    UnsupportedLayout(usize),
}
