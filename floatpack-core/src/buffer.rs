use std::marker::PhantomData;

use ndarray::{Array, ArrayView, Dimension, NdIndex};

use crate::error::CodecError;
use crate::kind::CodeKind;

/// Owned N-dimensional array of integer codes plus its reconstruction range.
///
/// The two scalars mean `(min, max)` for the linear codec and
/// `(logmin, logmax)` for the logarithmic one; the buffer itself does not
/// distinguish — decoding with the matching codec does.
///
/// Invariants, upheld from construction onward:
/// - the shape never changes;
/// - `lo` and `hi` are finite;
/// - every stored code lies within the representable range of `K`.
///
/// The public surface is read-only (shape, indexed read, code view); a
/// buffer is produced once by an encode call and never mutated.
#[derive(Debug, Clone)]
pub struct QuantizedBuffer<K: CodeKind, D: Dimension> {
    codes: Array<K::Repr, D>,
    lo: f64,
    hi: f64,
    kind: PhantomData<K>,
}

impl<K: CodeKind, D: Dimension> QuantizedBuffer<K, D> {
    /// Reassemble a buffer from a deserialized payload, re-validating the
    /// invariants: both scalars must be finite and every code must lie in
    /// the kind's range (the scan only matters for the 24-bit kinds).
    pub fn from_parts(codes: Array<K::Repr, D>, lo: f64, hi: f64) -> Result<Self, CodecError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(CodecError::NonFiniteRange { lo, hi });
        }
        for (index, &code) in codes.iter().enumerate() {
            let c = K::to_f64(code);
            if !(K::MIN..=K::MAX).contains(&c) {
                return Err(CodecError::CodeOutOfRange {
                    index,
                    bits: K::BITS,
                });
            }
        }
        Ok(Self::from_parts_unchecked(codes, lo, hi))
    }

    /// Like [`from_parts`](Self::from_parts) but skips the per-code scan.
    /// The caller must guarantee the invariants; the codecs use this after
    /// producing saturated codes themselves.
    pub fn from_parts_unchecked(codes: Array<K::Repr, D>, lo: f64, hi: f64) -> Self {
        debug_assert!(lo.is_finite() && hi.is_finite());
        Self {
            codes,
            lo,
            hi,
            kind: PhantomData,
        }
    }

    /// Surrender the code array and the two range scalars, in that order.
    /// This is the host's serialization hook: persist these three pieces
    /// and [`from_parts`](Self::from_parts) rebuilds the buffer.
    pub fn into_parts(self) -> (Array<K::Repr, D>, f64, f64) {
        (self.codes, self.lo, self.hi)
    }

    pub fn shape(&self) -> &[usize] {
        self.codes.shape()
    }

    pub fn raw_dim(&self) -> D {
        self.codes.raw_dim()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Read one code; `None` when the index is out of bounds.
    pub fn get<I>(&self, index: I) -> Option<K::Repr>
    where
        I: NdIndex<D>,
    {
        self.codes.get(index).copied()
    }

    /// Read-only view of the code array.
    pub fn codes(&self) -> ArrayView<'_, K::Repr, D> {
        self.codes.view()
    }

    /// Lower range scalar (`min` linear, `logmin` logarithmic).
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper range scalar (`max` linear, `logmax` logarithmic).
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Bit width of the code kind.
    pub fn bits(&self) -> u32 {
        K::BITS
    }
}
