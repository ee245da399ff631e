// Row-band fan-out over the rayon global pool. Rows never interact, so any
// partition of the row range gives the same bytes as the sequential driver.

use rayon::prelude::*;

use super::{check_strided, dispatch_rows, required_len};
use crate::{BlendError, Capability};

/// Below this many meaningful bytes the whole image runs on the caller's thread.
pub const PARALLEL_MIN_BYTES: usize = 1 << 20;

/// Minimum meaningful bytes handed to one rayon task.
pub const PARALLEL_MIN_BAND_BYTES: usize = 128 * 1024;

#[inline]
fn band_rows(width: usize, height: usize) -> Option<usize> {
    let rows = PARALLEL_MIN_BAND_BYTES.div_ceil(width).max(1);
    if height.div_ceil(rows) < 2 {
        return None;
    }
    Some(rows)
}

/// [`darken_strided`](super::darken_strided) split into row bands across the
/// rayon thread pool.
///
/// Same validation and output as the sequential entry point. Small images,
/// or images too short to split into two bands, are blended on the calling
/// thread.
pub fn darken_strided_par(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), BlendError> {
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    if width == 0 || height == 0 {
        return Ok(());
    }

    let capability = Capability::detect();
    let band = match band_rows(width, height) {
        Some(band) if width.saturating_mul(height) >= PARALLEL_MIN_BYTES => band,
        _ => {
            dispatch_rows(capability, src, dst, width, height, src_stride, dst_stride);
            return Ok(());
        }
    };
    log::trace!("darken: {height} rows in bands of {band} across rayon");

    // Trim to the last meaningful byte so every band, including a short last
    // one, holds `(rows - 1) * stride + width` bytes.
    let src = &src[..required_len(width, height, src_stride)?];
    let dst = &mut dst[..required_len(width, height, dst_stride)?];

    dst.par_chunks_mut(band * dst_stride)
        .zip(src.par_chunks(band * src_stride))
        .for_each(|(d, s)| {
            let rows = (d.len() - width) / dst_stride + 1;
            dispatch_rows(capability, s, d, width, rows, src_stride, dst_stride);
        });
    Ok(())
}
