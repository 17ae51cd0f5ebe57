use floatpack_core::CodecError;
use thiserror::Error;

/// Slab driver failures.
#[derive(Error, Debug)]
pub enum SlabError {
    /// The requested axis does not exist in the input array.
    #[error("axis {axis} out of bounds for array of rank {rank}")]
    AxisOutOfBounds { axis: usize, rank: usize },

    /// Collection members must all share one shape.
    #[error("slab shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Nothing to reassemble.
    #[error("empty slab collection")]
    EmptyCollection,

    /// A per-slab encode failed; validation errors surface unchanged.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Reassembly failed inside `ndarray` (unreachable for collections
    /// built by the driver, which guarantees uniform shapes).
    #[error("slab reassembly failed: {0}")]
    Stack(#[from] ndarray::ShapeError),
}
