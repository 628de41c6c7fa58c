use std::str::FromStr;

use filterkit_image::RasterImage;

use crate::error::{FilterError, MatrixFormatError};
use crate::parallel;

/// Luminance weights used by [`ColorMatrix::saturation`].
const LUM_R: f32 = 0.213;
const LUM_G: f32 = 0.715;
const LUM_B: f32 = 0.072;

/// Number of coefficients in a 4x5 color matrix.
pub const MATRIX_LEN: usize = 20;

/// A 4x5 affine color transform.
///
/// Coefficients are stored row-major: rows produce R, G, B, A and columns
/// weigh R, G, B, A and a constant bias. A pixel is transformed as
///
/// ```text
/// R' = m[0]*R  + m[1]*G  + m[2]*B  + m[3]*A  + m[4]
/// G' = m[5]*R  + m[6]*G  + m[7]*B  + m[8]*A  + m[9]
/// B' = m[10]*R + m[11]*G + m[12]*B + m[13]*A + m[14]
/// A' = m[15]*R + m[16]*G + m[17]*B + m[18]*A + m[19]
/// ```
///
/// with every result rounded and clamped to `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMatrix([f32; MATRIX_LEN]);

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorMatrix {
    /// The matrix that leaves every pixel unchanged.
    pub const fn identity() -> Self {
        Self([
            1.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, //
        ])
    }

    /// Create a matrix from its 20 row-major coefficients.
    pub const fn from_array(coefficients: [f32; MATRIX_LEN]) -> Self {
        Self(coefficients)
    }

    /// The row-major coefficients.
    pub fn coefficients(&self) -> &[f32; MATRIX_LEN] {
        &self.0
    }

    /// A saturation matrix.
    ///
    /// `1.0` is the identity and `0.0` maps every color to its luminance,
    /// `0.213 R + 0.715 G + 0.072 B`. Values in between interpolate linearly:
    /// each channel becomes `lum * (1 - s) + channel * s`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_imgproc::color::ColorMatrix;
    ///
    /// assert_eq!(ColorMatrix::saturation(1.0), ColorMatrix::identity());
    /// ```
    pub fn saturation(s: f32) -> Self {
        let inv = 1.0 - s;
        let r = LUM_R * inv;
        let g = LUM_G * inv;
        let b = LUM_B * inv;
        Self([
            r + s, g, b, 0.0, 0.0, //
            r, g + s, b, 0.0, 0.0, //
            r, g, b + s, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, //
        ])
    }

    /// A matrix scaling each channel independently.
    pub const fn scale(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([
            r, 0.0, 0.0, 0.0, 0.0, //
            0.0, g, 0.0, 0.0, 0.0, //
            0.0, 0.0, b, 0.0, 0.0, //
            0.0, 0.0, 0.0, a, 0.0, //
        ])
    }

    /// A matrix scaling R, G and B by `factor` and adding `bias` to each.
    /// Alpha passes through.
    pub const fn scale_bias(factor: f32, bias: f32) -> Self {
        Self([
            factor, 0.0, 0.0, 0.0, bias, //
            0.0, factor, 0.0, 0.0, bias, //
            0.0, 0.0, factor, 0.0, bias, //
            0.0, 0.0, 0.0, 1.0, 0.0, //
        ])
    }

    /// Compose `self` with `post`, so that `self` is applied first and `post`
    /// second.
    ///
    /// Both matrices are treated as 5x5 with an implicit `[0, 0, 0, 0, 1]` last
    /// row, so the bias column of `self` is transformed by `post` too.
    pub fn post_concat(&self, post: &ColorMatrix) -> Self {
        let a = &post.0;
        let b = &self.0;
        let mut out = [0.0f32; MATRIX_LEN];
        for row in 0..4 {
            let j = row * 5;
            for col in 0..4 {
                out[j + col] = a[j] * b[col]
                    + a[j + 1] * b[col + 5]
                    + a[j + 2] * b[col + 10]
                    + a[j + 3] * b[col + 15];
            }
            out[j + 4] = a[j] * b[4] + a[j + 1] * b[9] + a[j + 2] * b[14] + a[j + 3] * b[19] + a[j + 4];
        }
        Self(out)
    }

    /// Transform one `[r, g, b, a]` pixel into `dst`.
    #[inline]
    pub(crate) fn transform(&self, src: &[u8], dst: &mut [u8]) {
        let m = &self.0;
        let (r, g, b, a) = (src[0] as f32, src[1] as f32, src[2] as f32, src[3] as f32);
        for (row, out) in dst.iter_mut().take(4).enumerate() {
            let k = row * 5;
            let v = m[k] * r + m[k + 1] * g + m[k + 2] * b + m[k + 3] * a + m[k + 4];
            *out = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

impl FromStr for ColorMatrix {
    type Err = MatrixFormatError;

    /// Parse 20 comma-separated real numbers. Whitespace around each token is
    /// ignored; empty, non-numeric or non-finite tokens are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split(',').map(str::trim).collect::<Vec<_>>();
        if tokens.len() != MATRIX_LEN {
            return Err(MatrixFormatError::WrongCoefficientCount(tokens.len()));
        }

        let mut coefficients = [0.0f32; MATRIX_LEN];
        for (index, (token, c)) in tokens.iter().zip(coefficients.iter_mut()).enumerate() {
            let v = token
                .parse::<f32>()
                .map_err(|_| MatrixFormatError::InvalidCoefficient {
                    index,
                    token: token.to_string(),
                })?;
            if !v.is_finite() {
                return Err(MatrixFormatError::NonFinite { index });
            }
            *c = v;
        }

        Ok(Self(coefficients))
    }
}

/// Apply a color matrix to every pixel of an image.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `matrix` - The 4x5 transform, alpha handled by its fourth row.
///
/// # Returns
///
/// A new image of the same size; `src` is left untouched.
///
/// # Example
///
/// ```
/// use filterkit_image::{Pixel, RasterImage};
/// use filterkit_imgproc::color::{apply_matrix, ColorMatrix};
///
/// let image = RasterImage::from_size_pixel([4, 5].into(), Pixel::rgb(10, 20, 30)).unwrap();
/// let out = apply_matrix(&image, &ColorMatrix::scale_bias(1.0, 50.0));
///
/// assert_eq!(out.pixel(0, 0), Some(Pixel::rgb(60, 70, 80)));
/// ```
pub fn apply_matrix(src: &RasterImage, matrix: &ColorMatrix) -> RasterImage {
    let mut dst = src.filled_like(Default::default());
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        matrix.transform(src_pixel, dst_pixel);
    });
    dst
}

/// Parse `raw` as a [`ColorMatrix`] and apply it.
///
/// This is the entry point for matrices produced outside the engine, such as
/// the text returned by a generation service.
///
/// # Errors
///
/// Returns [`FilterError::InvalidMatrixFormat`] when `raw` is not exactly 20
/// comma-separated finite numbers. No image is produced in that case.
pub fn apply_custom_matrix(src: &RasterImage, raw: &str) -> Result<RasterImage, FilterError> {
    let matrix = raw.parse::<ColorMatrix>().map_err(|e| {
        log::warn!("rejecting custom color matrix: {e}");
        e
    })?;
    log::debug!("applying custom color matrix {:?}", matrix.coefficients());
    Ok(apply_matrix(src, &matrix))
}
