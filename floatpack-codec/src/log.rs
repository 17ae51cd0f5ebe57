//! Logarithmic codec: uniform remap in log-space with a zero sentinel.
//!
//! Code 0 is reserved for exact zero; nonzero values map onto
//! `[1, 2^bits - 1]` via `code = round(c + Δ⁻¹ · ln x) + 1` with
//! `Δ⁻¹ = (2^bits - 2) / (logmax - logmin)`. The rounding offset `c`
//! depends on the [`RoundMode`]:
//!
//! - `LinSpace`: `c = 0.5 - Δ⁻¹ · ln(minpos · (exp(1/Δ⁻¹) + 1) / 2)`
//! - `LogSpace`: `c = -logmin · Δ⁻¹`
//!
//! Both expressions are numerically delicate as `Δ⁻¹ → 0` or `→ ∞` and are
//! kept in this exact form; the degenerate `logmin == logmax` branch maps
//! every nonzero value to code 1.

use floatpack_core::{
    CodecError, QuantizedBuffer, Quantizer, Real, RoundMode, UnsignedKind, U16, U24, U32, U8,
};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Log-domain quantizer for the unsigned code kinds.
///
/// Input elements must be finite and non-negative; zeros get the sentinel
/// code and take no part in the range reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogQuantizer {
    mode: RoundMode,
}

impl LogQuantizer {
    /// `LinSpace` rounding, the default.
    pub fn new() -> Self {
        Self {
            mode: RoundMode::LinSpace,
        }
    }

    pub fn with_mode(mode: RoundMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RoundMode {
        self.mode
    }
}

/// Validation + reduction pass: rejects negative and non-finite elements,
/// returns `(minpos, max)`. `minpos` is the smallest strictly positive
/// element, 0 when none exists.
fn scan<S, D>(values: &ArrayBase<S, D>) -> Result<(f64, f64), CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    let mut minpos = f64::INFINITY;
    let mut max = 0.0f64;
    for (index, &v) in values.iter().enumerate() {
        let v = v.to_f64();
        if !v.is_finite() || v < 0.0 {
            return Err(CodecError::NegativeOrNonFinite { value: v, index });
        }
        if v > 0.0 && v < minpos {
            minpos = v;
        }
        if v > max {
            max = v;
        }
    }
    if minpos.is_infinite() {
        minpos = 0.0;
    }
    Ok((minpos, max))
}

impl<K: UnsignedKind> Quantizer<K> for LogQuantizer {
    fn quantize<S, D>(&self, values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<K, D>, CodecError>
    where
        S: Data,
        S::Elem: Real,
        D: Dimension,
    {
        let (minpos, max) = scan(values)?;

        // No positive element at all: store a finite placeholder range.
        // Code 1 is unreachable in that case, so the placeholder is never
        // consulted during decode.
        let (logmin, logmax) = if minpos == 0.0 {
            (0.0, 0.0)
        } else {
            (minpos.ln(), max.ln())
        };

        let top = K::MAX; // 2^bits - 1 for the unsigned kinds
        let (inv_step, offset) = if logmax == logmin {
            // all nonzero values equal (or a single one): everything nonzero
            // lands on code 1
            (0.0, 0.0)
        } else {
            let inv = (top - 1.0) / (logmax - logmin);
            let offset = match self.mode {
                RoundMode::LinSpace => {
                    0.5 - inv * (minpos * ((1.0 / inv).exp() + 1.0) / 2.0).ln()
                }
                RoundMode::LogSpace => -logmin * inv,
            };
            (inv, offset)
        };

        let codes = values.map(|&v| {
            let v = v.to_f64();
            if v == 0.0 {
                K::saturate(0.0)
            } else {
                let code = (offset + inv_step * v.ln()).round() + 1.0;
                // rounding at the top boundary can overshoot by one unit
                K::saturate(code.min(top))
            }
        });
        Ok(QuantizedBuffer::from_parts_unchecked(codes, logmin, logmax))
    }

    fn dequantize<F, D>(&self, packed: &QuantizedBuffer<K, D>) -> Array<F, D>
    where
        F: Real,
        D: Dimension,
    {
        let logmin = packed.lo();
        let step = (packed.hi() - logmin) / (K::MAX - 1.0);
        packed.codes().map(|&c| {
            let c = K::to_f64(c);
            if c == 0.0 {
                F::from_f64(0.0)
            } else {
                F::from_f64((logmin + (c - 1.0) * step).exp())
            }
        })
    }
}

/// Decode with the kind's default float type: `f32` for the 8/16/24-bit
/// kinds, `f64` for the 32-bit one.
pub fn dequantize<K, D>(packed: &QuantizedBuffer<K, D>) -> Array<K::DefaultFloat, D>
where
    K: UnsignedKind,
    D: Dimension,
{
    LogQuantizer::new().dequantize(packed)
}

pub fn quantize_u8<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U8, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LogQuantizer::new().quantize(values)
}

pub fn quantize_u16<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U16, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LogQuantizer::new().quantize(values)
}

pub fn quantize_u24<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U24, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LogQuantizer::new().quantize(values)
}

pub fn quantize_u32<S, D>(values: &ArrayBase<S, D>) -> Result<QuantizedBuffer<U32, D>, CodecError>
where
    S: Data,
    S::Elem: Real,
    D: Dimension,
{
    LogQuantizer::new().quantize(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatpack_core::CodeKind;
    use ndarray::{arr1, Array1};

    #[test]
    fn test_zero_sentinel_both_modes() {
        let data = arr1(&[0.0f64, 1.0, 2.0, 0.0, 4.0]);
        for mode in [RoundMode::LinSpace, RoundMode::LogSpace] {
            let q = LogQuantizer::with_mode(mode);
            let packed: QuantizedBuffer<U8, _> = q.quantize(&data).unwrap();
            assert_eq!(packed.get(0), Some(0), "mode {:?}", mode);
            assert_eq!(packed.get(3), Some(0), "mode {:?}", mode);
            assert!(packed.get(1).unwrap() >= 1);
        }
    }

    #[test]
    fn test_uniform_nonzero_maps_to_code_one() {
        let data = Array1::from(vec![5.0f64; 4]);
        let packed = quantize_u8(&data).unwrap();
        assert!(packed.codes().iter().all(|&c| c == 1));

        // degenerate spacing decodes code 1 back to the value exactly
        let out: Array1<f64> = LogQuantizer::new().dequantize(&packed);
        assert!(out.iter().all(|&v| (v - 5.0).abs() < 1e-12));
    }

    #[test]
    fn test_single_nonzero_element() {
        let data = arr1(&[0.0f64, 3.0]);
        let packed = quantize_u16(&data).unwrap();
        assert_eq!(packed.get(0), Some(0));
        assert_eq!(packed.get(1), Some(1));

        let out: Array1<f64> = LogQuantizer::new().dequantize(&packed);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_input() {
        let data = Array1::<f64>::zeros(5);
        let packed = quantize_u8(&data).unwrap();
        assert!(packed.codes().iter().all(|&c| c == 0));
        assert_eq!((packed.lo(), packed.hi()), (0.0, 0.0));

        let out: Array1<f32> = dequantize(&packed);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_negative_input_fails() {
        let data = arr1(&[1.0f64, -0.5, 2.0]);
        let err = quantize_u8(&data);
        assert!(matches!(
            err,
            Err(CodecError::NegativeOrNonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite_input_fails() {
        let data = arr1(&[1.0f64, f64::NAN]);
        assert!(matches!(
            quantize_u8(&data),
            Err(CodecError::NegativeOrNonFinite { index: 1, .. })
        ));

        let data = arr1(&[f64::INFINITY]);
        assert!(matches!(
            quantize_u16(&data),
            Err(CodecError::NegativeOrNonFinite { index: 0, .. })
        ));
    }

    #[test]
    fn test_logspace_alignment() {
        // LogSpace aligns minpos exactly onto code 1 and max onto the top
        let data = arr1(&[1.0f64, 10.0, 100.0, 1000.0]);
        let q = LogQuantizer::with_mode(RoundMode::LogSpace);
        let packed: QuantizedBuffer<U8, _> = q.quantize(&data).unwrap();
        assert_eq!(packed.get(0), Some(1));
        assert_eq!(packed.get(3), Some(255));
    }

    #[test]
    fn test_top_code_saturation_u24() {
        let data = arr1(&[1e-6f64, 1.0, 1e6]);
        let packed = quantize_u24(&data).unwrap();
        assert!(packed.codes().iter().all(|&c| c <= 16_777_215));
        // the max element sits on (or one below) the top code
        assert!(packed.get(2).unwrap() >= 16_777_214);
    }

    #[test]
    fn test_roundtrip_within_one_log_step() {
        let data: Array1<f64> = Array1::from(
            (0..256)
                .map(|i| if i % 17 == 0 { 0.0 } else { (i as f64 * 0.11).exp() * 1e-3 })
                .collect::<Vec<_>>(),
        );

        for mode in [RoundMode::LinSpace, RoundMode::LogSpace] {
            let q = LogQuantizer::with_mode(mode);
            let packed: QuantizedBuffer<U16, _> = q.quantize(&data).unwrap();
            let step = (packed.hi() - packed.lo()) / (U16::MAX - 1.0);
            let out: Array1<f64> = q.dequantize(&packed);

            for (i, (&x, &y)) in data.iter().zip(out.iter()).enumerate() {
                if x == 0.0 {
                    assert_eq!(y, 0.0, "zero not preserved at {}", i);
                } else {
                    let log_err = (x.ln() - y.ln()).abs();
                    // LogSpace centers each bucket (half a step); LinSpace
                    // shifts buckets toward linear-domain optimality and may
                    // use up to a full step in log domain
                    let bound = match mode {
                        RoundMode::LogSpace => 0.5 * step + 1e-9,
                        RoundMode::LinSpace => step + 1e-9,
                    };
                    assert!(
                        log_err <= bound,
                        "mode {:?} index {}: log err {} > {} (step {})",
                        mode,
                        i,
                        log_err,
                        bound,
                        step
                    );
                }
            }
        }
    }

    #[test]
    fn test_metadata_is_log_extrema() {
        let data = arr1(&[0.0f64, 0.5, 8.0]);
        let packed = quantize_u8(&data).unwrap();
        assert!((packed.lo() - 0.5f64.ln()).abs() < 1e-12);
        assert!((packed.hi() - 8.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_default_decode_float_kinds() {
        let data = arr1(&[0.0f64, 1.0, 4.0]);

        let packed8 = quantize_u8(&data).unwrap();
        let out8: Array1<f32> = dequantize(&packed8);
        assert_eq!(out8[0], 0.0);

        let packed32 = quantize_u32(&data).unwrap();
        let out32: Array1<f64> = dequantize(&packed32);
        assert_eq!(out32[0], 0.0);
        assert!((out32[2] - 4.0).abs() < 1e-6);
    }
}
