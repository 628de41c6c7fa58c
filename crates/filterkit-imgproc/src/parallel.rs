use rayon::prelude::*;

use filterkit_image::{RasterImage, CHANNELS};

/// Apply a function to each pixel in the image in parallel.
///
/// Rows are distributed over the rayon global pool. `f` receives the source
/// pixel and the destination pixel as `[r, g, b, a]` slices.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn par_iter_rows(
    src: &RasterImage,
    dst: &mut RasterImage,
    f: impl Fn(&[u8], &mut [u8]) + Send + Sync,
) {
    debug_assert_eq!(src.size(), dst.size());
    let stride = CHANNELS * src.cols();
    src.as_slice()
        .par_chunks_exact(stride)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(stride))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(CHANNELS)
                .zip(dst_chunk.chunks_exact_mut(CHANNELS))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel in the image in parallel, passing its
/// `(x, y)` coordinates.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn par_iter_rows_indexed(
    src: &RasterImage,
    dst: &mut RasterImage,
    f: impl Fn(usize, usize, &[u8], &mut [u8]) + Send + Sync,
) {
    debug_assert_eq!(src.size(), dst.size());
    let stride = CHANNELS * src.cols();
    src.as_slice()
        .par_chunks_exact(stride)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(stride))
        .enumerate()
        .for_each(|(y, (src_chunk, dst_chunk))| {
            src_chunk
                .chunks_exact(CHANNELS)
                .zip(dst_chunk.chunks_exact_mut(CHANNELS))
                .enumerate()
                .for_each(|(x, (src_pixel, dst_pixel))| {
                    f(x, y, src_pixel, dst_pixel);
                });
        });
}
