#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// RGBA raster image representation.
pub mod image;

/// A single RGBA pixel value.
pub mod pixel;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, RasterImage, CHANNELS};
pub use crate::pixel::Pixel;
