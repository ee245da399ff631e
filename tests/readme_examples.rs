//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_core_api() {
    use darken::{darken, darken_strided};

    let src = vec![10u8, 250, 0, 5];
    let mut dst = vec![20u8, 5, 0, 255];
    darken(&src, &mut dst).unwrap();
    assert_eq!(dst, [10, 5, 0, 5]);

    let src = vec![0u8; 260 * 60];
    let mut dst = vec![255u8; 272 * 60];
    darken_strided(&src, &mut dst, 256, 60, 260, 272).unwrap();
    assert!(dst[..256].iter().all(|&b| b == 0));
    assert!(dst[256..272].iter().all(|&b| b == 255));
}

#[test]
fn readme_layers() {
    use darken::{BlendMode, BlendStack};

    let mut stack = BlendStack::new(vec![200u8; 64], 16, 4, 16).unwrap();
    let ink = stack.push(BlendMode::Darken);
    ink[0] = 30;
    stack.pop().unwrap();
    let out = stack.finish().unwrap();
    assert_eq!(out[0], 30);
    assert!(out[1..].iter().all(|&b| b == 200));
}

#[test]
fn readme_bitmap_scan_order() {
    use darken::darken_bits;

    // Two 24bpp rows of 3 pixels, DWORD-aligned stride of 12 bytes.
    let from = [0x40u8; 24];
    let mut to = [0x80u8; 24];
    darken_bits(&from, 12, &mut to, 12, 2, 9).unwrap();
    assert_eq!(&to[..9], &[0x40; 9]);
    assert_eq!(&to[9..12], &[0x80; 3]);
}

#[test]
fn readme_invalid_geometry() {
    use darken::{BlendError, GeometryFault, darken_strided};

    let mut dst = [7u8; 8];
    let err = darken_strided(&[0u8; 8], &mut dst, 8, 1, 8, 4).unwrap_err();
    assert_eq!(
        err,
        BlendError::InvalidGeometry(GeometryFault::StrideTooSmall { stride: 4, width: 8 })
    );
    assert_eq!(dst, [7u8; 8]);
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use darken::typed_rgb;
    use rgb::Bgra;

    let ink = vec![Bgra { b: 0u8, g: 64, r: 255, a: 255 }; 100];
    let mut paper = vec![Bgra { b: 200u8, g: 200, r: 200, a: 255 }; 100];
    typed_rgb::darken_bgra(&ink, &mut paper).unwrap();
    assert_eq!(paper[99], Bgra { b: 0, g: 64, r: 200, a: 255 });
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::{ImgRefMut, ImgVec};
    use darken::imgref;
    use rgb::Rgba;

    let layer = ImgVec::new(vec![Rgba::new(0u8, 0, 0, 255); 640 * 480], 640, 480);
    let mut canvas = vec![Rgba::new(255u8, 255, 255, 255); 640 * 480];
    imgref::darken_img(layer.as_ref(), ImgRefMut::new(&mut canvas, 640, 480)).unwrap();
    assert!(canvas.iter().all(|p| *p == Rgba::new(0, 0, 0, 255)));
}

#[cfg(feature = "rayon")]
#[test]
fn readme_parallel() {
    use darken::{PARALLEL_MIN_BYTES, darken_strided, darken_strided_par};

    let (w, h, stride) = (4096, 512, 4100);
    // Large enough to actually split into bands.
    assert!(w * h >= PARALLEL_MIN_BYTES);
    let src: Vec<u8> = (0..stride * h).map(|i| (i % 253) as u8).collect();
    let dst: Vec<u8> = (0..stride * h).map(|i| (i % 241) as u8).collect();

    let mut seq = dst.clone();
    darken_strided(&src, &mut seq, w, h, stride, stride).unwrap();
    let mut par = dst;
    darken_strided_par(&src, &mut par, w, h, stride, stride).unwrap();
    assert_eq!(par, seq);
}
