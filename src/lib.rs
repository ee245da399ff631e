//! # darken
//!
//! Darken blend for bitmap scan data: every destination byte becomes the
//! minimum of itself and the matching source byte. Lower byte values are
//! darker, so drawing onto a white layer and darkening it into the layer
//! below composites like ink on paper.
//!
//! SIMD-optimized for x86-64 (AVX2, SSE2), ARM NEON, and WASM SIMD128
//! with automatic fallback to scalar code. Every path produces identical
//! bytes.
//!
//! ## Core operations (always available)
//!
//! All functions in the crate root operate on raw `&[u8]` / `&mut [u8]`
//! slices, either as one contiguous row or as strided bitmaps whose rows
//! may carry padding. Geometry is validated before any byte is touched.
//!
//! ```rust
//! let src = [10u8, 250, 0, 5];
//! let mut dst = [20u8, 5, 0, 255];
//! darken::darken(&src, &mut dst).unwrap();
//! assert_eq!(dst, [10, 5, 0, 5]);
//! ```
//!
//! ## Feature flags
//!
//! - **`rgb`** — Typed blends over [`rgb`] crate pixel slices via bytemuck.
//! - **`imgref`** — Whole-image blends over [`imgref`] views. Implies `rgb`.
//! - **`rayon`** — Row-band parallel blend. Implies `std`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;
mod probe;

pub mod bytes;
pub mod layers;

pub use bytes::*;
pub use error::{BlendError, GeometryFault};
pub use layers::{BlendMode, BlendStack};
pub use probe::Capability;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;
