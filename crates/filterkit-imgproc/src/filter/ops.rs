use filterkit_image::{Pixel, RasterImage, CHANNELS};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use super::kernels::Kernel3x3;

/// What a 3x3 filter writes to the outermost ring of pixels, which has no
/// full neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderPolicy {
    /// Border pixels are copied from the source unchanged.
    #[default]
    CopySource,
    /// Border pixels are transparent black, as if the output started zeroed.
    Transparent,
}

/// Convolve the R, G and B channels of an image with a 3x3 kernel.
///
/// Each interior pixel (`1 <= x < width - 1`, `1 <= y < height - 1`) gets
/// `clamp(sum(kernel[j][i] * src[x + i - 1][y + j - 1]), 0, 255)` per color
/// channel, truncated towards zero, and an opaque alpha. Border pixels follow
/// `border`. Images less than 3 pixels wide or tall have no interior.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The 3x3 weights, shared by the three color channels.
/// * `border` - What to write to the border ring.
///
/// # Returns
///
/// A new image of the same size.
pub fn filter_3x3(src: &RasterImage, kernel: &Kernel3x3, border: BorderPolicy) -> RasterImage {
    let mut dst = match border {
        BorderPolicy::CopySource => src.clone(),
        BorderPolicy::Transparent => src.filled_like(Pixel::TRANSPARENT),
    };

    let (width, height) = (src.width(), src.height());
    if width < 3 || height < 3 {
        return dst;
    }

    let stride = width * CHANNELS;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .skip(1)
        .take(height - 2)
        .for_each(|(y, dst_row)| {
            for x in 1..width - 1 {
                let mut sum = [0.0f32; 3];
                for j in 0..3 {
                    let row = (y + j - 1) * stride;
                    for i in 0..3 {
                        let idx = row + (x + i - 1) * CHANNELS;
                        let w = kernel.weight(i, j);
                        sum[0] += src_data[idx] as f32 * w;
                        sum[1] += src_data[idx + 1] as f32 * w;
                        sum[2] += src_data[idx + 2] as f32 * w;
                    }
                }
                let out = &mut dst_row[x * CHANNELS..(x + 1) * CHANNELS];
                for (o, s) in out.iter_mut().zip(sum) {
                    *o = s.clamp(0.0, 255.0) as u8;
                }
                out[3] = 255;
            }
        });

    dst
}

/// Sharpen an image with the [`Kernel3x3::sharpen`] kernel.
///
/// Interior pixels become opaque. Border pixels are a copy of the source, see
/// [`BorderPolicy::CopySource`].
///
/// # Example
///
/// ```
/// use filterkit_image::{Pixel, RasterImage};
/// use filterkit_imgproc::filter::sharpen;
///
/// let image = RasterImage::from_size_pixel([5, 5].into(), Pixel::rgb(40, 80, 120)).unwrap();
/// let out = sharpen(&image);
///
/// assert_eq!(out, image);
/// ```
pub fn sharpen(src: &RasterImage) -> RasterImage {
    filter_3x3(src, &Kernel3x3::sharpen(), BorderPolicy::CopySource)
}
