//! Blend layers for bitmap compositing.
//!
//! A [`BlendStack`] owns a base bitmap. Pushing [`BlendMode::Darken`] opens a
//! fresh white layer with the base geometry; callers draw into it through
//! [`BlendStack::surface_mut`], and popping darkens that layer into the one
//! beneath. Layers nest, so a darken group can sit inside another.
//!
//! ```rust
//! use darken::{BlendMode, BlendStack};
//!
//! let mut stack = BlendStack::new(vec![200u8; 8], 4, 2, 4).unwrap();
//! let layer = stack.push(BlendMode::Darken);
//! layer[1] = 50;
//! layer[6] = 250;
//! stack.pop().unwrap();
//! assert_eq!(stack.finish().unwrap(), [200, 50, 200, 200, 200, 200, 200, 200]);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::{BlendError, bytes};

/// How a pushed layer is merged into the layer below when popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Byte-wise minimum of the two layers.
    #[default]
    Darken,
}

impl BlendMode {
    /// Byte every channel of a fresh layer starts at.
    ///
    /// White for darken, so an untouched pixel never changes the layer below.
    pub const fn clear_byte(self) -> u8 {
        match self {
            BlendMode::Darken => 0xFF,
        }
    }
}

/// Stack of bitmaps sharing one geometry, merged top-down on pop.
#[derive(Debug, Clone)]
pub struct BlendStack {
    width: usize,
    height: usize,
    stride: usize,
    base: Vec<u8>,
    layers: Vec<(BlendMode, Vec<u8>)>,
}

impl BlendStack {
    /// Wrap `base`, a bitmap of `height` rows of `width` meaningful bytes,
    /// `stride` bytes apart.
    pub fn new(
        base: Vec<u8>,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, BlendError> {
        bytes::check_strided(base.len(), width, height, stride)?;
        Ok(Self {
            width,
            height,
            stride,
            base,
            layers: Vec::new(),
        })
    }

    /// Meaningful bytes per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of layers pushed above the base.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Open a new layer cleared for `mode` and return it for drawing.
    ///
    /// The layer has the same length and stride as the base.
    pub fn push(&mut self, mode: BlendMode) -> &mut [u8] {
        let layer = vec![mode.clear_byte(); self.base.len()];
        self.layers.push((mode, layer));
        log::trace!("darken: pushed {mode:?} layer, depth {}", self.layers.len());
        self.surface_mut()
    }

    /// The bitmap currently being drawn into: the top layer, or the base.
    pub fn surface_mut(&mut self) -> &mut [u8] {
        match self.layers.last_mut() {
            Some((_, layer)) => layer,
            None => &mut self.base,
        }
    }

    /// Merge the top layer into the one beneath and discard it.
    pub fn pop(&mut self) -> Result<(), BlendError> {
        let (mode, top) = self.layers.pop().ok_or(BlendError::NoLayer)?;
        let (width, height, stride) = (self.width, self.height, self.stride);
        let below = self.surface_mut();
        match mode {
            BlendMode::Darken => {
                bytes::darken_strided(&top, below, width, height, stride, stride)?;
            }
        }
        log::trace!("darken: popped {mode:?} layer, depth {}", self.layers.len());
        Ok(())
    }

    /// Return the base bitmap. Fails if any layer is still pushed.
    pub fn finish(self) -> Result<Vec<u8>, BlendError> {
        if !self.layers.is_empty() {
            return Err(BlendError::UnbalancedLayers(self.layers.len()));
        }
        Ok(self.base)
    }
}
