use filterkit_image::{Pixel, RasterImage};

use super::gradient::{GradientStop, RadialGradient};
use super::source_over;
use crate::parallel;

/// Parameters of the vignette effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VignetteParams {
    /// Gradient radius as a fraction of the image width.
    pub radius_factor: f32,
    /// Relative position where darkening starts.
    pub falloff_start: f32,
    /// Overlay color reached at the radius and beyond.
    pub color: Pixel,
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self {
            radius_factor: 0.7,
            falloff_start: 0.5,
            color: Pixel::rgba(0, 0, 0, 0xAA),
        }
    }
}

impl VignetteParams {
    /// The overlay gradient for an image of the given size.
    ///
    /// It is centered on the image with radius `radius_factor * width`, fully
    /// transparent up to `falloff_start` and ramps to `color` at the radius.
    pub fn gradient(&self, width: usize, height: usize) -> RadialGradient {
        RadialGradient::new(
            (width as f32 / 2.0, height as f32 / 2.0),
            width as f32 * self.radius_factor,
            vec![
                GradientStop::new(Pixel::TRANSPARENT, 0.0),
                GradientStop::new(Pixel::TRANSPARENT, self.falloff_start),
                GradientStop::new(self.color, 1.0),
            ],
        )
    }
}

/// Darken the corners of an image with the default [`VignetteParams`].
pub fn vignette(src: &RasterImage) -> RasterImage {
    vignette_with(src, &VignetteParams::default())
}

/// Darken the corners of an image.
///
/// The gradient from [`VignetteParams::gradient`] is sampled at each pixel
/// center and blended over the source with [`source_over`].
///
/// # Example
///
/// ```
/// use filterkit_image::{Pixel, RasterImage};
/// use filterkit_imgproc::composite::{vignette_with, VignetteParams};
///
/// let image = RasterImage::from_size_pixel([9, 9].into(), Pixel::rgb(200, 200, 200)).unwrap();
/// let out = vignette_with(&image, &VignetteParams::default());
///
/// assert_eq!(out.pixel(4, 4), image.pixel(4, 4));
/// assert!(out.pixel(0, 0).unwrap().r < 200);
/// ```
pub fn vignette_with(src: &RasterImage, params: &VignetteParams) -> RasterImage {
    let gradient = params.gradient(src.width(), src.height());
    let mut dst = src.filled_like(Pixel::TRANSPARENT);
    parallel::par_iter_rows_indexed(src, &mut dst, |x, y, src_pixel, dst_pixel| {
        let overlay = gradient.sample(x as f32 + 0.5, y as f32 + 0.5);
        source_over(overlay, Pixel::from_slice(src_pixel)).write_to(dst_pixel);
    });
    dst
}
