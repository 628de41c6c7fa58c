/// A pixel with four 8-bit channels.
///
/// Channels are stored straight (not premultiplied). The in-memory order of
/// [`crate::RasterImage`] is `[r, g, b, a]`; packed 32-bit words use `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);

    /// Create a pixel from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Unpack a `0xAARRGGBB` word.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_image::Pixel;
    ///
    /// let p = Pixel::from_argb(0xAA112233);
    /// assert_eq!(p, Pixel::rgba(0x11, 0x22, 0x33, 0xAA));
    /// ```
    pub const fn from_argb(word: u32) -> Self {
        Self {
            a: (word >> 24) as u8,
            r: (word >> 16) as u8,
            g: (word >> 8) as u8,
            b: word as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` word.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Read a pixel from an interleaved `[r, g, b, a]` chunk.
    ///
    /// PRECONDITION: `chunk` holds at least four bytes.
    #[inline]
    pub fn from_slice(chunk: &[u8]) -> Self {
        Self::rgba(chunk[0], chunk[1], chunk[2], chunk[3])
    }

    /// Write the pixel into an interleaved `[r, g, b, a]` chunk.
    ///
    /// PRECONDITION: `chunk` holds at least four bytes.
    #[inline]
    pub fn write_to(self, chunk: &mut [u8]) {
        chunk[0] = self.r;
        chunk[1] = self.g;
        chunk[2] = self.b;
        chunk[3] = self.a;
    }

    /// The channels in storage order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}
