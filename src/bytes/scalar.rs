use archmage::prelude::*;

use super::darken_bytes;

// ===========================================================================
// Scalar row implementation
// ===========================================================================

pub(super) fn darken_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    darken_bytes(src, dst);
}

// ===========================================================================
// Scalar dispatch targets for incant!
// ===========================================================================

pub(super) fn darken_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    darken_row_scalar(t, s, d);
}

pub(super) fn darken_rows_scalar(
    t: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        darken_row_scalar(t, &src[y * ss..][..w], &mut dst[y * ds..][..w]);
    }
}
