//! Pure CPU image filters over in-memory RGBA rasters.
//!
//! ```
//! use filterkit::image::{Pixel, RasterImage};
//! use filterkit::imgproc::Filter;
//!
//! let image = RasterImage::from_size_pixel([8, 8].into(), Pixel::rgb(200, 120, 40)).unwrap();
//! let sepia = Filter::Sepia.apply(&image);
//!
//! assert_eq!(sepia.size(), image.size());
//! ```

#[doc(inline)]
pub use filterkit_image as image;

#[doc(inline)]
pub use filterkit_imgproc as imgproc;
