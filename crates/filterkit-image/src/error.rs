/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the image has no rows or no columns.
    #[error("Image size must be positive, got {0}x{1}")]
    ZeroSize(usize, usize),

    /// Error when data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the buffer length of the image size overflows `usize`.
    #[error("Image size {0}x{1} is too large")]
    SizeOverflow(usize, usize),
}
