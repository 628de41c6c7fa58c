use filterkit_image::{Pixel, RasterImage};

use crate::error::FilterError;
use crate::parallel;

/// Channels above this value are inverted by [`solarize`].
pub const SOLARIZE_THRESHOLD: u8 = 128;

/// Number of levels kept per channel by [`posterize`].
pub const POSTERIZE_LEVELS: usize = 4;

/// Heatmap palette, cold to hot.
pub const HEATMAP_STOPS: [Pixel; 5] = [
    Pixel::rgb(0, 0, 255),
    Pixel::rgb(0, 255, 255),
    Pixel::rgb(0, 255, 0),
    Pixel::rgb(255, 255, 0),
    Pixel::rgb(255, 0, 0),
];

/// Solarize with the default threshold of 128.
pub fn solarize(src: &RasterImage) -> RasterImage {
    solarize_with_threshold(src, SOLARIZE_THRESHOLD)
}

/// Replace every R, G or B value greater than `threshold` with
/// `255 - value`. Values at or below the threshold and alpha are kept.
///
/// # Example
///
/// ```
/// use filterkit_image::{Pixel, RasterImage};
/// use filterkit_imgproc::stylize::solarize_with_threshold;
///
/// let image = RasterImage::from_size_pixel([2, 2].into(), Pixel::rgb(10, 128, 200)).unwrap();
/// let out = solarize_with_threshold(&image, 128);
///
/// assert_eq!(out.pixel(0, 0), Some(Pixel::rgb(10, 128, 55)));
/// ```
pub fn solarize_with_threshold(src: &RasterImage, threshold: u8) -> RasterImage {
    let mut dst = src.filled_like(Pixel::TRANSPARENT);
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        for (d, &v) in dst_pixel[..3].iter_mut().zip(&src_pixel[..3]) {
            *d = if v > threshold { 255 - v } else { v };
        }
        dst_pixel[3] = src_pixel[3];
    });
    dst
}

/// Posterize to [`POSTERIZE_LEVELS`] levels. Every output channel is one of
/// 32, 96, 160 or 224.
pub fn posterize(src: &RasterImage) -> RasterImage {
    posterize_levels(src, POSTERIZE_LEVELS)
}

/// Quantize R, G and B to `levels` buckets of width `256 / levels`, snapping
/// each value to the middle of its bucket. Alpha is kept.
///
/// # Errors
///
/// Returns [`FilterError::InvalidLevels`] unless `levels` is in `2..=256`.
pub fn posterize_with_levels(src: &RasterImage, levels: usize) -> Result<RasterImage, FilterError> {
    if !(2..=256).contains(&levels) {
        return Err(FilterError::InvalidLevels(levels));
    }
    Ok(posterize_levels(src, levels))
}

fn posterize_levels(src: &RasterImage, levels: usize) -> RasterImage {
    let bucket = (256 / levels) as u32;
    // lookup table indexed by channel value
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        let v = v as u32;
        *out = ((v / bucket) * bucket + bucket / 2).min(255) as u8;
    }

    let mut dst = src.filled_like(Pixel::TRANSPARENT);
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        for (d, &v) in dst_pixel[..3].iter_mut().zip(&src_pixel[..3]) {
            *d = lut[v as usize];
        }
        dst_pixel[3] = src_pixel[3];
    });
    dst
}

/// Map luminance onto [`HEATMAP_STOPS`].
///
/// The luminance `0.299 R + 0.587 G + 0.114 B` is truncated to an integer,
/// normalized to `[0, 1]` and used to pick the stop at
/// `floor(position * (stops - 1))`. Stops are not blended, so the output shows
/// hard bands. The source color and alpha are discarded.
pub fn heatmap(src: &RasterImage) -> RasterImage {
    let last = HEATMAP_STOPS.len() - 1;
    let mut dst = src.filled_like(Pixel::TRANSPARENT);
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let luminance = (0.299 * src_pixel[0] as f64
            + 0.587 * src_pixel[1] as f64
            + 0.114 * src_pixel[2] as f64) as u32;
        let position = luminance as f32 / 255.0;
        let index = ((position * last as f32) as usize).min(last);
        HEATMAP_STOPS[index].write_to(dst_pixel);
    });
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use filterkit_image::ImageError;
    use std::collections::BTreeSet;

    /// Every value of a channel appears once, alpha counts down.
    fn ramp_image() -> Result<RasterImage, ImageError> {
        let pixels = (0..=255u8)
            .map(|v| Pixel::rgba(v, 255 - v, v / 2, 255 - v))
            .collect();
        RasterImage::from_pixels([16, 16].into(), pixels)
    }

    #[test]
    fn test_solarize_rule() -> Result<(), ImageError> {
        let image = ramp_image()?;
        let out = solarize(&image);
        for (src, dst) in image.pixels().zip(out.pixels()) {
            for (s, d) in [(src.r, dst.r), (src.g, dst.g), (src.b, dst.b)] {
                if s > 128 {
                    assert_eq!(d, 255 - s);
                } else {
                    assert_eq!(d, s);
                }
            }
            assert_eq!(dst.a, src.a);
        }
        Ok(())
    }

    #[test]
    fn test_solarize_threshold_boundary() -> Result<(), ImageError> {
        let image = RasterImage::from_pixels(
            [3, 1].into(),
            vec![Pixel::rgb(128, 129, 255), Pixel::rgb(0, 1, 127), Pixel::rgba(200, 0, 0, 7)],
        )?;
        let out = solarize(&image);
        assert_eq!(out.pixel(0, 0), Some(Pixel::rgb(128, 126, 0)));
        assert_eq!(out.pixel(1, 0), Some(Pixel::rgb(0, 1, 127)));
        assert_eq!(out.pixel(2, 0), Some(Pixel::rgba(55, 0, 0, 7)));

        let out = solarize_with_threshold(&image, 0);
        assert_eq!(out.pixel(1, 0), Some(Pixel::rgb(0, 254, 128)));
        Ok(())
    }

    #[test]
    fn test_posterize_levels_set() -> Result<(), ImageError> {
        let image = ramp_image()?;
        let out = posterize(&image);
        let allowed = BTreeSet::from([32u8, 96, 160, 224]);
        let mut seen = BTreeSet::new();
        for (src, dst) in image.pixels().zip(out.pixels()) {
            for v in [dst.r, dst.g, dst.b] {
                assert!(allowed.contains(&v), "unexpected level {v}");
                seen.insert(v);
            }
            assert_eq!(dst.a, src.a);
        }
        assert_eq!(seen, allowed);
        Ok(())
    }

    #[test]
    fn test_posterize_buckets() -> Result<(), ImageError> {
        let image = RasterImage::from_pixels(
            [4, 1].into(),
            vec![
                Pixel::rgb(0, 63, 64),
                Pixel::rgb(127, 128, 191),
                Pixel::rgb(192, 255, 100),
                Pixel::rgba(1, 2, 3, 4),
            ],
        )?;
        let out = posterize(&image);
        assert_eq!(out.pixel(0, 0), Some(Pixel::rgb(32, 32, 96)));
        assert_eq!(out.pixel(1, 0), Some(Pixel::rgb(96, 160, 160)));
        assert_eq!(out.pixel(2, 0), Some(Pixel::rgb(224, 224, 96)));
        assert_eq!(out.pixel(3, 0), Some(Pixel::rgba(32, 32, 32, 4)));
        Ok(())
    }

    #[test]
    fn test_posterize_with_levels() -> Result<(), FilterError> {
        let image = ramp_image()?;
        assert_eq!(
            posterize_with_levels(&image, 1),
            Err(FilterError::InvalidLevels(1))
        );
        assert_eq!(
            posterize_with_levels(&image, 257),
            Err(FilterError::InvalidLevels(257))
        );

        // one bucket per value leaves the image unchanged
        assert_eq!(posterize_with_levels(&image, 256)?, image);

        let out = posterize_with_levels(&image, 2)?;
        assert!(out
            .pixels()
            .all(|p| [p.r, p.g, p.b].iter().all(|v| *v == 64 || *v == 192)));

        // bucket 85, the last partial bucket is clamped
        let out = posterize_with_levels(&image, 3)?;
        assert_eq!(out.pixel(15, 15).map(|p| p.r), Some(255));
        Ok(())
    }

    #[test]
    fn test_heatmap_bands() -> Result<(), ImageError> {
        let image = RasterImage::from_pixels(
            [7, 1].into(),
            vec![
                Pixel::rgba(0, 0, 0, 0),
                Pixel::rgb(60, 60, 60),
                Pixel::rgb(70, 70, 70),
                Pixel::rgb(140, 140, 140),
                Pixel::rgb(200, 200, 200),
                Pixel::rgb(255, 255, 255),
                Pixel::rgb(255, 255, 254),
            ],
        )?;
        let out = heatmap(&image);
        assert_eq!(out.pixel(0, 0), Some(HEATMAP_STOPS[0]));
        assert_eq!(out.pixel(1, 0), Some(HEATMAP_STOPS[0]));
        assert_eq!(out.pixel(2, 0), Some(HEATMAP_STOPS[1]));
        assert_eq!(out.pixel(3, 0), Some(HEATMAP_STOPS[2]));
        assert_eq!(out.pixel(4, 0), Some(HEATMAP_STOPS[3]));
        // white reaches the last stop
        assert_eq!(out.pixel(5, 0), Some(HEATMAP_STOPS[4]));
        // luminance 254 stays one stop below
        assert_eq!(out.pixel(6, 0), Some(HEATMAP_STOPS[3]));
        Ok(())
    }

    #[test]
    fn test_heatmap_discards_source() -> Result<(), ImageError> {
        let image = ramp_image()?;
        let out = heatmap(&image);
        assert!(out.pixels().all(|p| HEATMAP_STOPS.contains(&p)));
        assert!(out.pixels().all(|p| p.a == 255));
        Ok(())
    }
}
