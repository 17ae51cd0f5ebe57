use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::buffer::QuantizedBuffer;
use crate::error::CodecError;
use crate::kind::{CodeKind, Real};

/// Encode/decode interface for one code kind `K`.
///
/// Both operations are pure bulk transforms: a sequential reduction pass
/// (extrema, validation) followed by an independent elementwise map. No
/// state is carried between calls and every encode allocates a fresh
/// result.
///
/// `dequantize` is infallible — the buffer invariants guarantee finite
/// range scalars and in-range codes.
pub trait Quantizer<K: CodeKind> {
    fn quantize<S, D>(&self, values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<K, D>, CodecError>
    where
        S: Data,
        S::Elem: Real,
        D: Dimension;

    fn dequantize<F, D>(&self, packed: &QuantizedBuffer<K, D>) -> Array<F, D>
    where
        F: Real,
        D: Dimension;
}
