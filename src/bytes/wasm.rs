use core::arch::wasm32::u8x16_min;

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

use super::{BLOCK, darken_bytes};

// ===========================================================================
// WASM SIMD128 — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn darken_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    let n = src.len().min(dst.len());
    let (src, dst) = (&src[..n], &mut dst[..n]);

    let (src_blocks, src_tail) = src.as_chunks::<BLOCK>();
    let (dst_blocks, dst_tail) = dst.as_chunks_mut::<BLOCK>();
    for (s, d) in src_blocks.iter().zip(dst_blocks.iter_mut()) {
        let m = u8x16_min(v128_load(s), v128_load(&*d));
        v128_store(d, m);
    }

    darken_bytes(src_tail, dst_tail);
}

#[arcane]
pub(super) fn darken_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    darken_row_wasm128(t, s, d);
}

#[arcane]
pub(super) fn darken_rows_wasm128(
    t: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        darken_row_wasm128(t, &src[y * ss..][..w], &mut dst[y * ds..][..w]);
    }
}
