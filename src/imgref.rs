//! Whole-image darken blends using [`imgref`] types.
//!
//! Source and destination may have different strides; only their widths
//! and heights must agree. No allocation — caller owns all buffers.
//!
//! ```rust
//! use rgb::Bgra;
//! use ::imgref::{ImgRefMut, ImgVec};
//! use darken::imgref;
//!
//! let layer = ImgVec::new(vec![Bgra { b: 0u8, g: 0, r: 0, a: 255 }; 6], 3, 2);
//! let mut canvas_buf = vec![Bgra { b: 255u8, g: 255, r: 255, a: 255 }; 8];
//! let canvas = ImgRefMut::new_stride(&mut canvas_buf, 3, 2, 4);
//! imgref::darken_img(layer.as_ref(), canvas).unwrap();
//! assert_eq!(canvas_buf[0], Bgra { b: 0, g: 0, r: 0, a: 255 });
//! assert_eq!(canvas_buf[3], Bgra { b: 255, g: 255, r: 255, a: 255 });
//! ```

use bytemuck::Pod;
use imgref::{ImgRef, ImgRefMut};

use crate::{BlendError, Capability, GeometryFault};

// ---------------------------------------------------------------------------
// Dimension check
// ---------------------------------------------------------------------------

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), BlendError> {
    if sw != dw || sh != dh {
        Err(GeometryFault::DimensionMismatch {
            from_width: sw,
            from_height: sh,
            to_width: dw,
            to_height: dh,
        }
        .into())
    } else {
        Ok(())
    }
}

/// Darken every pixel of `dst` with the matching pixel of `src`.
///
/// Padding past each row's width is left alone in `dst`. The whole image runs
/// through one dispatched SIMD region.
pub fn darken_img<P: Pod>(
    src: ImgRef<'_, P>,
    mut dst: ImgRefMut<'_, P>,
) -> Result<(), BlendError> {
    let (width, height) = (dst.width(), dst.height());
    check_dims(src.width(), src.height(), width, height)?;
    let px = size_of::<P>();
    let to_bytes = |n: usize| n.checked_mul(px).ok_or(GeometryFault::Overflow);
    let (row_bytes, src_stride, dst_stride) =
        (to_bytes(width)?, to_bytes(src.stride())?, to_bytes(dst.stride())?);

    let s: &[u8] = bytemuck::cast_slice::<P, u8>(src.buf());
    let d: &mut [u8] = bytemuck::cast_slice_mut::<P, u8>(dst.buf_mut());
    crate::bytes::darken_strided_with(
        Capability::detect(),
        s,
        d,
        row_bytes,
        height,
        src_stride,
        dst_stride,
    )
}
