use std::fmt;
use std::str::FromStr;

use filterkit_image::RasterImage;
use rayon::prelude::*;

use crate::color::{self, ColorMatrix};
use crate::composite;
use crate::error::FilterError;
use crate::filter;
use crate::stylize;

/// The built-in named filters.
///
/// Every variant resolves to a fixed [`ColorMatrix`] or a fixed function, and
/// [`Filter::apply`] never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Filter {
    /// Full desaturation.
    Grayscale,
    /// Desaturated with a damped blue channel.
    Sepia,
    /// Inverted R, G and B.
    Invert,
    /// Slight desaturation, green cut, blue lift.
    Vintage,
    /// +50 on each color channel.
    Brightness,
    /// 1.5x contrast around mid-gray.
    Contrast,
    /// Cool tint.
    Winter,
    /// Channels above 128 inverted.
    Solarize,
    /// Four levels per channel.
    Posterize,
    /// Luminance mapped onto a five color palette.
    Heatmap,
    /// 3x3 sharpen, border copied.
    Sharpen,
    /// Darkened corners.
    Vignette,
}

impl Filter {
    /// Every built-in filter.
    pub const ALL: [Filter; 12] = [
        Filter::Grayscale,
        Filter::Sepia,
        Filter::Invert,
        Filter::Vintage,
        Filter::Brightness,
        Filter::Contrast,
        Filter::Winter,
        Filter::Solarize,
        Filter::Posterize,
        Filter::Heatmap,
        Filter::Sharpen,
        Filter::Vignette,
    ];

    /// The lowercase name of the filter.
    pub const fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Sepia => "sepia",
            Filter::Invert => "invert",
            Filter::Vintage => "vintage",
            Filter::Brightness => "brightness",
            Filter::Contrast => "contrast",
            Filter::Winter => "winter",
            Filter::Solarize => "solarize",
            Filter::Posterize => "posterize",
            Filter::Heatmap => "heatmap",
            Filter::Sharpen => "sharpen",
            Filter::Vignette => "vignette",
        }
    }

    /// The color matrix of a matrix filter, `None` for the others.
    pub fn color_matrix(self) -> Option<ColorMatrix> {
        match self {
            Filter::Grayscale => Some(ColorMatrix::grayscale()),
            Filter::Sepia => Some(ColorMatrix::sepia()),
            Filter::Invert => Some(ColorMatrix::invert()),
            Filter::Vintage => Some(ColorMatrix::vintage()),
            Filter::Brightness => Some(ColorMatrix::brightness(color::BRIGHTNESS_BIAS)),
            Filter::Contrast => Some(ColorMatrix::contrast(color::CONTRAST_FACTOR)),
            Filter::Winter => Some(ColorMatrix::winter()),
            Filter::Solarize
            | Filter::Posterize
            | Filter::Heatmap
            | Filter::Sharpen
            | Filter::Vignette => None,
        }
    }

    /// Apply the filter, returning a new image of the same size.
    ///
    /// # Example
    ///
    /// ```
    /// use filterkit_image::{Pixel, RasterImage};
    /// use filterkit_imgproc::preset::Filter;
    ///
    /// let image = RasterImage::from_size_pixel([3, 3].into(), Pixel::rgb(0, 100, 255)).unwrap();
    /// let out = Filter::Invert.apply(&image);
    ///
    /// assert_eq!(out.pixel(1, 1), Some(Pixel::rgb(255, 155, 0)));
    /// ```
    pub fn apply(self, src: &RasterImage) -> RasterImage {
        log::debug!("applying {} to {}", self, src.size());
        match self {
            Filter::Grayscale => color::grayscale(src),
            Filter::Sepia => color::sepia(src),
            Filter::Invert => color::invert(src),
            Filter::Vintage => color::vintage(src),
            Filter::Brightness => color::brightness(src),
            Filter::Contrast => color::contrast(src),
            Filter::Winter => color::winter(src),
            Filter::Solarize => stylize::solarize(src),
            Filter::Posterize => stylize::posterize(src),
            Filter::Heatmap => stylize::heatmap(src),
            Filter::Sharpen => filter::sharpen(src),
            Filter::Vignette => composite::vignette(src),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Parse a filter name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Filter::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))
    }
}

/// Apply several filters to the same source, each independently.
///
/// Requests run concurrently on the rayon pool. The output order matches
/// `filters`.
pub fn apply_all(src: &RasterImage, filters: &[Filter]) -> Vec<RasterImage> {
    filters.par_iter().map(|f| f.apply(src)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filterkit_image::{ImageError, Pixel};

    #[test]
    fn test_names_round_trip() -> Result<(), FilterError> {
        for f in Filter::ALL {
            assert_eq!(f.name().parse::<Filter>()?, f);
            assert_eq!(f.to_string(), f.name());
        }
        assert_eq!(" GrayScale ".parse::<Filter>()?, Filter::Grayscale);
        assert_eq!(
            "blur".parse::<Filter>(),
            Err(FilterError::UnknownFilter("blur".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_matrix_variants() {
        let matrix_filters = Filter::ALL
            .into_iter()
            .filter(|f| f.color_matrix().is_some())
            .collect::<Vec<_>>();
        assert_eq!(
            matrix_filters,
            vec![
                Filter::Grayscale,
                Filter::Sepia,
                Filter::Invert,
                Filter::Vintage,
                Filter::Brightness,
                Filter::Contrast,
                Filter::Winter,
            ]
        );
    }

    #[test]
    fn test_apply_dispatch() -> Result<(), ImageError> {
        let image = RasterImage::from_size_pixel([5, 5].into(), Pixel::rgba(200, 100, 50, 128))?;
        for f in Filter::ALL {
            if let Some(matrix) = f.color_matrix() {
                assert_eq!(f.apply(&image), color::apply_matrix(&image, &matrix));
            }
        }
        assert_eq!(Filter::Solarize.apply(&image), stylize::solarize(&image));
        assert_eq!(Filter::Posterize.apply(&image), stylize::posterize(&image));
        assert_eq!(Filter::Heatmap.apply(&image), stylize::heatmap(&image));
        assert_eq!(Filter::Sharpen.apply(&image), filter::sharpen(&image));
        assert_eq!(Filter::Vignette.apply(&image), composite::vignette(&image));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Filter::Grayscale)?, r#""grayscale""#);
        let filters: Vec<Filter> = serde_json::from_str(r#"["sharpen", "vignette"]"#)?;
        assert_eq!(filters, vec![Filter::Sharpen, Filter::Vignette]);

        let matrix = ColorMatrix::sepia();
        let json = serde_json::to_string(&matrix)?;
        assert_eq!(serde_json::from_str::<ColorMatrix>(&json)?, matrix);
        Ok(())
    }

    #[test]
    fn test_apply_all_order() -> Result<(), ImageError> {
        let image = RasterImage::from_size_pixel([4, 4].into(), Pixel::rgb(10, 20, 30))?;
        let outputs = apply_all(&image, &Filter::ALL);
        assert_eq!(outputs.len(), Filter::ALL.len());
        for (f, out) in Filter::ALL.iter().zip(outputs.iter()) {
            assert_eq!(*out, f.apply(&image));
        }
        Ok(())
    }
}
