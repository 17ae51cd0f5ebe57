//! Affine codec: uniform remap of `[lo, hi]` onto the integer range.
//!
//! Formula: `code = round(Tmin + (x - lo) · Δ⁻¹)` with
//! `Δ⁻¹ = (Tmax - Tmin) / (hi - lo)`, and `Δ⁻¹ = 0` when the range is
//! degenerate (`hi == lo`). Decoding inverts: `x̂ = lo + (code - Tmin) · Δ`.

use floatpack_core::{
    CodeKind, CodecError, QuantizedBuffer, Quantizer, Real, I16, I24, I32, I8, U16, U24, U32, U8,
};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Linear quantizer with data-derived or caller-supplied bounds.
///
/// With [`new`](Self::new) the bounds are the actual extrema of each input,
/// so every element lands inside the code range by construction. With
/// [`with_range`](Self::with_range) the caller's bounds may not cover the
/// data; out-of-range values saturate to the boundary codes instead of
/// wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearQuantizer {
    range: Option<(f64, f64)>,
}

impl LinearQuantizer {
    /// Derive `(lo, hi)` from each input's extrema.
    pub fn new() -> Self {
        Self { range: None }
    }

    /// Use fixed bounds for every input.
    pub fn with_range(lo: f64, hi: f64) -> Self {
        Self {
            range: Some((lo, hi)),
        }
    }
}

/// Reduction pass: extrema over all elements, rejecting NaN/Inf.
/// An empty array leaves the fold identities in place and is rejected too.
fn data_extrema<S, D>(values: &ArrayBase<S, D>) -> Result<(f64, f64), CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values.iter() {
        let v = v.to_f64();
        if !v.is_finite() {
            return Err(CodecError::NonFiniteRange { lo: v, hi: v });
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return Err(CodecError::NonFiniteRange { lo, hi });
    }
    Ok((lo, hi))
}

impl<K: CodeKind> Quantizer<K> for LinearQuantizer {
    fn quantize<S, D>(&self, values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<K, D>, CodecError>
    where
        S: Data,
        S::Elem: Real,
        D: Dimension,
    {
        let (lo, hi) = match self.range {
            Some((lo, hi)) => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Err(CodecError::NonFiniteRange { lo, hi });
                }
                (lo, hi)
            }
            None => data_extrema(values)?,
        };

        let inv_step = if hi == lo {
            0.0
        } else {
            (K::MAX - K::MIN) / (hi - lo)
        };

        let codes = values.map(|&v| {
            let mapped = K::MIN + (v.to_f64() - lo) * inv_step;
            // saturate covers the explicit-range case; with derived bounds
            // the mapped value is already inside [Tmin, Tmax]
            K::saturate(mapped.round())
        });
        Ok(QuantizedBuffer::from_parts_unchecked(codes, lo, hi))
    }

    fn dequantize<F, D>(&self, packed: &QuantizedBuffer<K, D>) -> Array<F, D>
    where
        F: Real,
        D: Dimension,
    {
        let lo = packed.lo();
        let step = (packed.hi() - lo) / (K::MAX - K::MIN);
        packed
            .codes()
            .map(|&c| F::from_f64(lo + (K::to_f64(c) - K::MIN) * step))
    }
}

/// Decode with the kind's default float type: `f32` for the 8/16/24-bit
/// kinds, `f64` for the 32-bit ones.
pub fn dequantize<K, D>(packed: &QuantizedBuffer<K, D>) -> Array<K::DefaultFloat, D>
where
    K: CodeKind,
    D: Dimension,
{
    LinearQuantizer::new().dequantize(packed)
}

pub fn quantize_u8<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U8, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_u16<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U16, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_u24<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U24, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_u32<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U32, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_i8<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<I8, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_i16<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<I16, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_i24<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<I24, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}

pub fn quantize_i32<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<I32, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LinearQuantizer::new().quantize(values)
}
