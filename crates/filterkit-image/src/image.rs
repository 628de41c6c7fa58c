use crate::error::ImageError;
use crate::pixel::Pixel;

/// Number of interleaved channels per pixel: red, green, blue and alpha.
pub const CHANNELS: usize = 4;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use filterkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Number of pixels covered by this size, or `None` on overflow.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A decoded RGBA raster with 8 bits per channel.
///
/// Pixels are stored row-major as interleaved `[r, g, b, a]` bytes. A value
/// can only be built with positive dimensions and a buffer whose length
/// matches them, so filters never have to re-validate their input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    size: ImageSize,
    data: Vec<u8>,
}

impl RasterImage {
    /// Create a new image from interleaved RGBA bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data, `width * height * 4` bytes.
    ///
    /// # Errors
    ///
    /// If either dimension is zero or the length of the pixel data does not
    /// match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_image::{ImageSize, RasterImage};
    ///
    /// let image = RasterImage::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 4],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = buffer_len(size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image from a row-major list of pixels.
    pub fn from_pixels(size: ImageSize, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        let data = pixels.into_iter().flat_map(Pixel::to_array).collect();
        Self::new(size, data)
    }

    /// Create a new image with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// If either dimension is zero or the buffer length overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_image::{ImageSize, Pixel, RasterImage};
    ///
    /// let image = RasterImage::from_size_pixel([3, 2].into(), Pixel::rgb(9, 8, 7)).unwrap();
    ///
    /// assert_eq!(image.num_pixels(), 6);
    /// assert_eq!(image.pixel(2, 1), Some(Pixel::rgb(9, 8, 7)));
    /// ```
    pub fn from_size_pixel(size: ImageSize, pixel: Pixel) -> Result<Self, ImageError> {
        let len = buffer_len(size)?;
        let data = pixel.to_array().repeat(len / CHANNELS);
        Self::new(size, data)
    }

    /// Create a new image from packed `0xAARRGGBB` words.
    pub fn from_argb(size: ImageSize, words: &[u32]) -> Result<Self, ImageError> {
        let expected = buffer_len(size)?;
        if words.len() * CHANNELS != expected {
            return Err(ImageError::InvalidChannelShape(
                words.len() * CHANNELS,
                expected,
            ));
        }
        let data = words
            .iter()
            .flat_map(|&w| Pixel::from_argb(w).to_array())
            .collect();
        Self::new(size, data)
    }

    /// Pack every pixel into a `0xAARRGGBB` word, row-major.
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixels().map(Pixel::to_argb).collect()
    }

    /// Allocate an image of the same size with every pixel set to `pixel`.
    ///
    /// Unlike [`RasterImage::from_size_pixel`] this cannot fail, since `self`
    /// already carries a valid size.
    pub fn filled_like(&self, pixel: Pixel) -> Self {
        Self {
            size: self.size,
            data: pixel.to_array().repeat(self.size.area()),
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the number of pixels of the image.
    pub fn num_pixels(&self) -> usize {
        self.size.area()
    }

    /// Get the interleaved RGBA bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the interleaved RGBA bytes mutably.
    ///
    /// The length cannot change, so the size invariant is kept.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its interleaved RGBA bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get the pixel at column `x` and row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = (y * self.width() + x) * CHANNELS;
        Some(Pixel::from_slice(&self.data[idx..idx + CHANNELS]))
    }

    /// Iterate over the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.chunks_exact(CHANNELS).map(Pixel::from_slice)
    }
}

/// Byte length of an RGBA buffer of `size`, rejecting empty and overflowing sizes.
fn buffer_len(size: ImageSize) -> Result<usize, ImageError> {
    if size.width == 0 || size.height == 0 {
        return Err(ImageError::ZeroSize(size.width, size.height));
    }
    size
        .checked_area()
        .and_then(|area| area.checked_mul(CHANNELS))
        .ok_or(ImageError::SizeOverflow(size.width, size.height))
}

#[cfg(test)]
mod tests {
    use crate::image::{ImageSize, RasterImage};
    use crate::{ImageError, Pixel};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = RasterImage::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_pixels(), 200);
        assert_eq!(image.pixels().count(), 200);

        Ok(())
    }

    #[test]
    fn image_invalid_shape() {
        let res = RasterImage::new([2, 2].into(), vec![0u8; 15]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_zero_size() {
        let res = RasterImage::new([0, 4].into(), vec![]);
        assert_eq!(res, Err(ImageError::ZeroSize(0, 4)));

        let res = RasterImage::from_size_pixel([4, 0].into(), Pixel::BLACK);
        assert_eq!(res, Err(ImageError::ZeroSize(4, 0)));
    }

    #[test]
    fn image_size_overflow() {
        let side = usize::MAX / 2 + 1;
        let huge: ImageSize = [side, 2].into();
        assert_eq!(huge.checked_area(), None);
        assert_eq!(
            RasterImage::new(huge, vec![]),
            Err(ImageError::SizeOverflow(side, 2))
        );
        assert_eq!(
            RasterImage::from_argb(huge, &[]),
            Err(ImageError::SizeOverflow(side, 2))
        );

        // pixel count fits, byte length does not
        let wide: ImageSize = [usize::MAX / 2, 1].into();
        assert_eq!(wide.checked_area(), Some(usize::MAX / 2));
        assert_eq!(
            RasterImage::from_size_pixel(wide, Pixel::BLACK),
            Err(ImageError::SizeOverflow(usize::MAX / 2, 1))
        );
    }

    #[test]
    fn image_pixel_access() -> Result<(), ImageError> {
        let pixels = vec![
            Pixel::rgb(1, 2, 3),
            Pixel::rgb(4, 5, 6),
            Pixel::rgba(7, 8, 9, 10),
            Pixel::rgba(11, 12, 13, 14),
        ];
        let image = RasterImage::from_pixels([2, 2].into(), pixels.clone())?;
        assert_eq!(image.pixel(0, 0), Some(pixels[0]));
        assert_eq!(image.pixel(1, 0), Some(pixels[1]));
        assert_eq!(image.pixel(0, 1), Some(pixels[2]));
        assert_eq!(image.pixel(1, 1), Some(pixels[3]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
        assert_eq!(image.pixels().collect::<Vec<_>>(), pixels);

        Ok(())
    }

    #[test]
    fn image_argb() -> Result<(), ImageError> {
        let words = [0xFF0000FF, 0x80112233, 0x00000000];
        let image = RasterImage::from_argb([3, 1].into(), &words)?;
        assert_eq!(image.pixel(0, 0), Some(Pixel::rgb(0, 0, 255)));
        assert_eq!(image.pixel(1, 0), Some(Pixel::rgba(0x11, 0x22, 0x33, 0x80)));
        assert_eq!(image.to_argb(), words);

        let res = RasterImage::from_argb([2, 1].into(), &words);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(12, 8)));

        Ok(())
    }

    #[test]
    fn image_filled_like() -> Result<(), ImageError> {
        let image = RasterImage::from_size_pixel([3, 5].into(), Pixel::rgb(1, 1, 1))?;
        let other = image.filled_like(Pixel::TRANSPARENT);
        assert_eq!(other.size(), image.size());
        assert!(other.pixels().all(|p| p == Pixel::TRANSPARENT));

        Ok(())
    }
}
