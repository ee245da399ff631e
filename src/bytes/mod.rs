// ---------------------------------------------------------------------------
// Row-level darken blend (byte-wise minimum) with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
// ---------------------------------------------------------------------------

use crate::{BlendError, Capability, GeometryFault};
use archmage::incant;
use archmage::prelude::*;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod x86;
#[cfg(target_arch = "x86_64")]
use x86::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;

#[cfg(feature = "rayon")]
mod parallel;
#[cfg(feature = "rayon")]
pub use parallel::{PARALLEL_MIN_BAND_BYTES, PARALLEL_MIN_BYTES, darken_strided_par};


/// Bytes per vector block: one 128-bit register of packed `u8`.
pub const BLOCK: usize = 16;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_contiguous(src_len: usize, dst_len: usize) -> Result<(), BlendError> {
    if src_len != dst_len {
        return Err(GeometryFault::LengthMismatch {
            from_len: src_len,
            to_len: dst_len,
        }
        .into());
    }
    Ok(())
}

/// Bytes a strided buffer must hold: `(height - 1) * stride + width`.
///
/// The last row needs no trailing padding. Zero for an empty geometry.
#[inline]
fn required_len(width: usize, height: usize, stride: usize) -> Result<usize, BlendError> {
    if width == 0 || height == 0 {
        return Ok(0);
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|rows| rows.checked_add(width))
        .ok_or(BlendError::InvalidGeometry(GeometryFault::Overflow))
}

#[inline]
pub(crate) fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), BlendError> {
    if width > stride {
        return Err(GeometryFault::StrideTooSmall { stride, width }.into());
    }
    let needed = required_len(width, height, stride)?;
    if len < needed {
        return Err(GeometryFault::BufferTooShort {
            needed,
            actual: len,
        }
        .into());
    }
    Ok(())
}

// ===========================================================================
// Utility
// ===========================================================================

/// Scalar tail shared by every tier: write only where `src` is darker.
#[inline(always)]
fn darken_bytes(src: &[u8], dst: &mut [u8]) {
    for (&s, d) in src.iter().zip(dst.iter_mut()) {
        if s < *d {
            *d = s;
        }
    }
}

fn dispatch_row(capability: Capability, src: &[u8], dst: &mut [u8]) {
    match capability {
        Capability::ScalarOnly => darken_impl_scalar(ScalarToken, src, dst),
        Capability::VectorCapable => {
            incant!(darken_impl(src, dst), [v3, v1, neon, wasm128, scalar]);
        }
    }
}

fn dispatch_rows(
    capability: Capability,
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) {
    match capability {
        Capability::ScalarOnly => darken_rows_scalar(
            ScalarToken,
            src,
            dst,
            width,
            height,
            src_stride,
            dst_stride,
        ),
        Capability::VectorCapable => {
            incant!(
                darken_rows(src, dst, width, height, src_stride, dst_stride),
                [v3, v1, neon, wasm128, scalar]
            );
        }
    }
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Darken `dst` with `src` in place: `dst[i] = min(src[i], dst[i])`.
///
/// Both slices are treated as a single row and must have the same length.
pub fn darken(src: &[u8], dst: &mut [u8]) -> Result<(), BlendError> {
    darken_with(Capability::detect(), src, dst)
}

/// [`darken`] on an explicitly chosen path.
///
/// `ScalarOnly` always runs the scalar loop. `VectorCapable` runs the best
/// SIMD tier that can be summoned and falls back to scalar if none can.
pub fn darken_with(
    capability: Capability,
    src: &[u8],
    dst: &mut [u8],
) -> Result<(), BlendError> {
    check_contiguous(src.len(), dst.len())?;
    if !dst.is_empty() {
        dispatch_row(capability, src, dst);
    }
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Darken a strided destination bitmap with a strided source bitmap.
///
/// For each of `height` rows, the first `width` bytes of the destination row
/// become the byte-wise minimum of themselves and the matching source bytes.
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows and must be ≥ `width`. Padding bytes between rows are
/// never read or written. Each buffer must be at least
/// `(height - 1) * stride + width` bytes.
///
/// `width == 0` or `height == 0` is a no-op.
pub fn darken_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), BlendError> {
    darken_strided_with(
        Capability::detect(),
        src,
        dst,
        width,
        height,
        src_stride,
        dst_stride,
    )
}

/// [`darken_strided`] on an explicitly chosen path.
pub fn darken_strided_with(
    capability: Capability,
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
    dispatch_rows(capability, src, dst, width, height, src_stride, dst_stride);
    Ok(())
}

/// Bitmap-scan form of [`darken_strided`], in the argument order of the
/// classic `DarkenBits(from, strideFrom, to, strideTo, height, widthInBytes)`
/// export.
pub fn darken_bits(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    row_count: usize,
    row_width_bytes: usize,
) -> Result<(), BlendError> {
    darken_strided(src, dst, row_width_bytes, row_count, src_stride, dst_stride)
}
