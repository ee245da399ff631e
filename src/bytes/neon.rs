use core::arch::aarch64::vminq_u8;

use archmage::prelude::*;
use safe_unaligned_simd::aarch64::{vld1q_u8, vst1q_u8};

use super::{BLOCK, darken_bytes};

// ===========================================================================
// ARM NEON — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn darken_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8]) {
    let n = src.len().min(dst.len());
    let (src, dst) = (&src[..n], &mut dst[..n]);

    let (src_blocks, src_tail) = src.as_chunks::<BLOCK>();
    let (dst_blocks, dst_tail) = dst.as_chunks_mut::<BLOCK>();
    for (s, d) in src_blocks.iter().zip(dst_blocks.iter_mut()) {
        let m = vminq_u8(vld1q_u8(s), vld1q_u8(&*d));
        vst1q_u8(d, m);
    }

    darken_bytes(src_tail, dst_tail);
}

#[arcane]
pub(super) fn darken_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8]) {
    darken_row_neon(t, s, d);
}

#[arcane]
pub(super) fn darken_rows_neon(
    t: NeonToken,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        darken_row_neon(t, &src[y * ss..][..w], &mut dst[y * ds..][..w]);
    }
}
