use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{
    _mm_loadu_si128, _mm_storeu_si128, _mm256_loadu_si256, _mm256_storeu_si256,
};

use super::{BLOCK, darken_bytes};

// ===========================================================================
// x86-64 AVX2 — rite row implementation
// ===========================================================================

// Two 16-byte blocks per iteration, then at most one single block. The
// bytes left for the scalar tail are `len % BLOCK`, same as the v1 tier.
#[rite]
pub(super) fn darken_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let n = src.len().min(dst.len());
    let (src, dst) = (&src[..n], &mut dst[..n]);

    let (src_pairs, src_rest) = src.as_chunks::<{ 2 * BLOCK }>();
    let (dst_pairs, dst_rest) = dst.as_chunks_mut::<{ 2 * BLOCK }>();
    for (s, d) in src_pairs.iter().zip(dst_pairs.iter_mut()) {
        let m = _mm256_min_epu8(_mm256_loadu_si256(s), _mm256_loadu_si256(&*d));
        _mm256_storeu_si256(d, m);
    }

    let (src_blocks, src_tail) = src_rest.as_chunks::<BLOCK>();
    let (dst_blocks, dst_tail) = dst_rest.as_chunks_mut::<BLOCK>();
    for (s, d) in src_blocks.iter().zip(dst_blocks.iter_mut()) {
        let m = _mm_min_epu8(_mm_loadu_si128(s), _mm_loadu_si128(&*d));
        _mm_storeu_si128(d, m);
    }

    darken_bytes(src_tail, dst_tail);
}

// ===========================================================================
// x86-64-v1 — rite row implementation (SSE2 pminub, 16-byte blocks)
// ===========================================================================

#[rite]
pub(super) fn darken_row_v1(_token: X64V1Token, src: &[u8], dst: &mut [u8]) {
    let n = src.len().min(dst.len());
    let (src, dst) = (&src[..n], &mut dst[..n]);

    let (src_blocks, src_tail) = src.as_chunks::<BLOCK>();
    let (dst_blocks, dst_tail) = dst.as_chunks_mut::<BLOCK>();
    for (s, d) in src_blocks.iter().zip(dst_blocks.iter_mut()) {
        let m = _mm_min_epu8(_mm_loadu_si128(s), _mm_loadu_si128(&*d));
        _mm_storeu_si128(d, m);
    }

    darken_bytes(src_tail, dst_tail);
}

// ===========================================================================
// arcane dispatch targets for incant!
// ===========================================================================

#[arcane]
pub(super) fn darken_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    darken_row_v3(t, s, d);
}

#[arcane]
pub(super) fn darken_rows_v3(
    t: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        darken_row_v3(t, &src[y * ss..][..w], &mut dst[y * ds..][..w]);
    }
}

#[arcane]
pub(super) fn darken_impl_v1(t: X64V1Token, s: &[u8], d: &mut [u8]) {
    darken_row_v1(t, s, d);
}

#[arcane]
pub(super) fn darken_rows_v1(
    t: X64V1Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        darken_row_v1(t, &src[y * ss..][..w], &mut dst[y * ds..][..w]);
    }
}
