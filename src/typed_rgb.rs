//! Type-safe darken blends over [`rgb`] crate pixel slices via bytemuck.
//!
//! Every channel, alpha included, is blended independently: the result is
//! the same as blending the underlying bytes.
//!
//! ```rust
//! use rgb::Rgba;
//! use darken::typed_rgb;
//!
//! let ink = vec![Rgba::new(10u8, 200, 0, 255); 16];
//! let mut paper = vec![Rgba::new(255u8, 128, 64, 255); 16];
//! typed_rgb::darken_rgba(&ink, &mut paper).unwrap();
//! assert_eq!(paper[0], Rgba::new(10, 128, 0, 255));
//! ```

use bytemuck::Pod;
use rgb::{Bgr, Bgra, Gray, Rgb, Rgba};

use crate::BlendError;

/// Darken `dst` with `src` for any plain-old-data pixel type.
///
/// Both slices must hold the same number of pixels.
pub fn darken_pixels<P: Pod>(src: &[P], dst: &mut [P]) -> Result<(), BlendError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::darken(src_bytes, dst_bytes)
}

/// Darken `&mut [Rgba<u8>]` with `&[Rgba<u8>]`.
pub fn darken_rgba(src: &[Rgba<u8>], dst: &mut [Rgba<u8>]) -> Result<(), BlendError> {
    darken_pixels(src, dst)
}

/// Darken `&mut [Bgra<u8>]` with `&[Bgra<u8>]`.
pub fn darken_bgra(src: &[Bgra<u8>], dst: &mut [Bgra<u8>]) -> Result<(), BlendError> {
    darken_pixels(src, dst)
}

/// Darken `&mut [Rgb<u8>]` with `&[Rgb<u8>]`.
pub fn darken_rgb(src: &[Rgb<u8>], dst: &mut [Rgb<u8>]) -> Result<(), BlendError> {
    darken_pixels(src, dst)
}

/// Darken `&mut [Bgr<u8>]` with `&[Bgr<u8>]`.
pub fn darken_bgr(src: &[Bgr<u8>], dst: &mut [Bgr<u8>]) -> Result<(), BlendError> {
    darken_pixels(src, dst)
}

/// Darken `&mut [Gray<u8>]` with `&[Gray<u8>]`.
pub fn darken_gray(src: &[Gray<u8>], dst: &mut [Gray<u8>]) -> Result<(), BlendError> {
    darken_pixels(src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryFault;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn rgba_channels_blend_independently() {
        let src: Vec<Rgba<u8>> = (0..19)
            .map(|i| Rgba::new(i as u8 * 10, 255 - i as u8, 128, i as u8))
            .collect();
        let mut dst = vec![Rgba::new(90u8, 240, 200, 5); 19];
        darken_rgba(&src, &mut dst).unwrap();
        for (i, px) in dst.iter().enumerate() {
            let s = src[i];
            assert_eq!(
                *px,
                Rgba::new(s.r.min(90), s.g.min(240), s.b.min(200), s.a.min(5)),
                "pixel {i}"
            );
        }
    }

    #[test]
    fn bgr_and_gray_blend() {
        let mut bgr = vec![Bgr { b: 9u8, g: 200, r: 50 }; 7];
        darken_bgr(&vec![Bgr { b: 10u8, g: 100, r: 60 }; 7], &mut bgr).unwrap();
        assert_eq!(bgr[6], Bgr { b: 9, g: 100, r: 50 });

        let ink: Vec<Gray<u8>> = bytemuck::allocation::cast_vec(vec![40u8; 33]);
        let mut gray: Vec<Gray<u8>> = bytemuck::allocation::cast_vec(vec![100u8; 33]);
        darken_gray(&ink, &mut gray).unwrap();
        assert!(bytemuck::cast_slice::<Gray<u8>, u8>(&gray).iter().all(|&g| g == 40));
    }

    #[test]
    fn pixel_count_mismatch_is_rejected() {
        let mut dst = vec![Rgb::new(1u8, 2, 3); 2];
        assert_eq!(
            darken_rgb(&[Rgb::new(0u8, 0, 0); 3], &mut dst),
            Err(BlendError::InvalidGeometry(GeometryFault::LengthMismatch {
                from_len: 9,
                to_len: 6
            }))
        );
        assert_eq!(dst, vec![Rgb::new(1u8, 2, 3); 2]);
    }
}
