/// Why a buffer geometry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GeometryFault {
    /// A row stride is smaller than the number of meaningful bytes per row.
    #[error("row stride {stride} is smaller than the row width {width}")]
    StrideTooSmall { stride: usize, width: usize },
    /// A buffer cannot hold every row the geometry describes.
    #[error("buffer holds {actual} bytes but the geometry needs {needed}")]
    BufferTooShort { needed: usize, actual: usize },
    /// `(height - 1) * stride + width` does not fit in `usize`.
    #[error("geometry overflows usize")]
    Overflow,
    /// Contiguous source and destination slices differ in length.
    #[error("source has {from_len} bytes but destination has {to_len}")]
    LengthMismatch { from_len: usize, to_len: usize },
    /// Source and destination images differ in width or height.
    #[error("source is {from_width}x{from_height} but destination is {to_width}x{to_height}")]
    DimensionMismatch {
        from_width: usize,
        from_height: usize,
        to_width: usize,
        to_height: usize,
    },
}

/// Error returned by every blend entry point.
///
/// Validation happens before any byte is read or written, so an `Err`
/// always means the destination is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BlendError {
    /// A buffer, stride or dimension does not describe a valid bitmap.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryFault),
    /// [`BlendStack::pop`](crate::layers::BlendStack::pop) with only the base left.
    #[error("no blend layer to pop")]
    NoLayer,
    /// [`BlendStack::finish`](crate::layers::BlendStack::finish) with layers still pushed.
    #[error("{0} blend layer(s) were pushed but never popped")]
    UnbalancedLayers(usize),
}
