use floatpack_core::{CodeKind, QuantizedBuffer};
use ndarray::Dimension;

use crate::error::SlabError;

/// Ordered sequence of per-slice quantized buffers.
///
/// One buffer per index along the quantized axis, in source index order.
/// All members share one shape and one code kind (the kind is enforced by
/// the type, the shape by [`from_slabs`](Self::from_slabs)).
#[derive(Debug, Clone)]
pub struct SlabCollection<K: CodeKind, D: Dimension> {
    slabs: Vec<QuantizedBuffer<K, D>>,
}

impl<K: CodeKind, D: Dimension> SlabCollection<K, D> {
    /// Build a collection, checking the uniform-shape invariant.
    pub fn from_slabs(slabs: Vec<QuantizedBuffer<K, D>>) -> Result<Self, SlabError> {
        if let Some(first) = slabs.first() {
            let expected = first.shape().to_vec();
            for slab in &slabs[1..] {
                if slab.shape() != expected.as_slice() {
                    return Err(SlabError::ShapeMismatch {
                        expected,
                        found: slab.shape().to_vec(),
                    });
                }
            }
        }
        Ok(Self { slabs })
    }

    /// Number of slabs (the length of the quantized axis).
    pub fn len(&self) -> usize {
        self.slabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    /// Shape shared by every slab; `None` when the collection is empty.
    pub fn slab_shape(&self) -> Option<&[usize]> {
        self.slabs.first().map(|s| s.shape())
    }

    pub fn get(&self, index: usize) -> Option<&QuantizedBuffer<K, D>> {
        self.slabs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuantizedBuffer<K, D>> {
        self.slabs.iter()
    }

    /// Surrender the slabs for host-side serialization.
    pub fn into_slabs(self) -> Vec<QuantizedBuffer<K, D>> {
        self.slabs
    }
}
