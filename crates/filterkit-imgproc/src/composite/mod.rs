//! Compositing operations
//!
//! Overlays generated per pixel and blended onto the source image.

/// Radial gradients.
mod gradient;
pub use gradient::*;

/// The vignette effect.
mod vignette;
pub use vignette::*;

use filterkit_image::Pixel;

/// Blend `overlay` on top of `src` with the source-over rule.
///
/// With alphas normalized to `[0, 1]`:
///
/// ```text
/// out_c = overlay_c * overlay_a + src_c * (1 - overlay_a)
/// out_a = overlay_a + src_a * (1 - overlay_a)
/// ```
///
/// # Example
///
/// ```
/// use filterkit_image::Pixel;
/// use filterkit_imgproc::composite::source_over;
///
/// let out = source_over(Pixel::TRANSPARENT, Pixel::rgba(1, 2, 3, 4));
/// assert_eq!(out, Pixel::rgba(1, 2, 3, 4));
/// ```
pub fn source_over(overlay: Pixel, src: Pixel) -> Pixel {
    let oa = overlay.a as f32 / 255.0;
    let inv = 1.0 - oa;
    let mix = |o: u8, s: u8| (o as f32 * oa + s as f32 * inv).round().clamp(0.0, 255.0) as u8;
    let alpha = ((oa + src.a as f32 / 255.0 * inv) * 255.0).round().clamp(0.0, 255.0) as u8;
    Pixel::rgba(mix(overlay.r, src.r), mix(overlay.g, src.g), mix(overlay.b, src.b), alpha)
}
