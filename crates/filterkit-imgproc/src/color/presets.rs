use filterkit_image::RasterImage;

use super::matrix::{apply_matrix, ColorMatrix};

/// Bias added per channel by [`brightness`].
pub const BRIGHTNESS_BIAS: f32 = 50.0;

/// Gain applied per channel by [`contrast`].
pub const CONTRAST_FACTOR: f32 = 1.5;

impl ColorMatrix {
    /// Full desaturation.
    pub fn grayscale() -> Self {
        Self::saturation(0.0)
    }

    /// Desaturate, then damp the blue channel.
    pub fn sepia() -> Self {
        Self::saturation(0.0).post_concat(&Self::scale(1.0, 1.0, 0.8, 1.0))
    }

    /// `255 - channel` for R, G and B; alpha passes through.
    pub const fn invert() -> Self {
        Self::scale_bias(-1.0, 255.0)
    }

    /// Slight desaturation with a green cut and a blue lift.
    pub fn vintage() -> Self {
        Self::saturation(0.8).post_concat(&Self::scale(1.0, 0.95, 1.1, 1.0))
    }

    /// Add `bias` to R, G and B.
    pub const fn brightness(bias: f32) -> Self {
        Self::scale_bias(1.0, bias)
    }

    /// Scale R, G and B by `factor` around the mid-gray 128.
    pub fn contrast(factor: f32) -> Self {
        Self::scale_bias(factor, 128.0 * (1.0 - factor))
    }

    /// Cool tint: reduced saturation, red cut, blue lift.
    pub fn winter() -> Self {
        Self::saturation(0.6).post_concat(&Self::scale(0.9, 1.0, 1.2, 1.0))
    }
}

/// Convert an image to grayscale. R, G and B of every output pixel are equal
/// and alpha is preserved.
pub fn grayscale(src: &RasterImage) -> RasterImage {
    apply_matrix(src, &ColorMatrix::grayscale())
}

/// Apply a sepia tone.
pub fn sepia(src: &RasterImage) -> RasterImage {
    apply_matrix(src, &ColorMatrix::sepia())
}

/// Invert R, G and B. Applying it twice returns the original image.
pub fn invert(src: &RasterImage) -> RasterImage {
    apply_matrix(src, &ColorMatrix::invert())
}

/// Apply the vintage look.
pub fn vintage(src: &RasterImage) -> RasterImage {
    apply_matrix(src, &ColorMatrix::vintage())
}

/// Brighten by [`BRIGHTNESS_BIAS`].
pub fn brightness(src: &RasterImage) -> RasterImage {
    adjust_brightness(src, BRIGHTNESS_BIAS)
}

/// Increase contrast by [`CONTRAST_FACTOR`].
pub fn contrast(src: &RasterImage) -> RasterImage {
    adjust_contrast(src, CONTRAST_FACTOR)
}

/// Apply the winter look.
pub fn winter(src: &RasterImage) -> RasterImage {
    apply_matrix(src, &ColorMatrix::winter())
}

/// Add `bias` to R, G and B, clamped to `[0, 255]`.
pub fn adjust_brightness(src: &RasterImage, bias: f32) -> RasterImage {
    apply_matrix(src, &ColorMatrix::brightness(bias))
}

/// Scale R, G and B by `factor` around 128, clamped to `[0, 255]`.
pub fn adjust_contrast(src: &RasterImage, factor: f32) -> RasterImage {
    apply_matrix(src, &ColorMatrix::contrast(factor))
}

/// Interpolate towards luminance, `0.0` being grayscale and `1.0` the
/// identity. Values above `1.0` oversaturate.
pub fn adjust_saturation(src: &RasterImage, saturation: f32) -> RasterImage {
    apply_matrix(src, &ColorMatrix::saturation(saturation))
}
