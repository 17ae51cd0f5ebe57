//! The generic slab driver.
//!
//! Slices are fully independent: each gets its own encode (and so its own
//! range metadata), and nothing orders one slice's work against another's.
//! Only reassembly needs every slab's result.

use floatpack_core::{CodeKind, Quantizer, Real};
use ndarray::{Array, ArrayBase, ArrayView, Axis, Data, Dimension, RemoveAxis};

use crate::collection::SlabCollection;
use crate::error::SlabError;

/// Quantize each slice of `values` along `axis` independently.
///
/// The collection is ordered by source index along `axis`. Fails fast with
/// [`SlabError::AxisOutOfBounds`] before touching any element.
pub fn quantize_slabs<K, Q, S, D>(
    quantizer: &Q,
    values: &ArrayBase<S, D>,
    axis: Axis,
) -> Result<SlabCollection<K, D::Smaller>, SlabError>
where
    K: CodeKind,
    Q: Quantizer<K>,
    S: Data,
    S::Elem: Real,
    D: RemoveAxis,
{
    let rank = values.ndim();
    if axis.index() >= rank {
        return Err(SlabError::AxisOutOfBounds {
            axis: axis.index(),
            rank,
        });
    }

    let mut slabs = Vec::with_capacity(values.len_of(axis));
    for slice in values.axis_iter(axis) {
        slabs.push(quantizer.quantize(&slice)?);
    }
    SlabCollection::from_slabs(slabs)
}

/// Decode every slab and stack the results along a new trailing axis.
///
/// For rank-`(N-1)` slabs the result has rank `N` with the quantized axis
/// **last**, regardless of where it sat in the source array; permuting it
/// back is the caller's business. This keeps reassembly a single stack with
/// no axis bookkeeping.
pub fn dequantize_slabs<F, K, Q, D>(
    quantizer: &Q,
    collection: &SlabCollection<K, D>,
) -> Result<Array<F, D::Larger>, SlabError>
where
    F: Real,
    K: CodeKind,
    Q: Quantizer<K>,
    D: Dimension,
    D::Larger: RemoveAxis,
{
    if collection.is_empty() {
        return Err(SlabError::EmptyCollection);
    }

    let decoded: Vec<Array<F, D>> = collection
        .iter()
        .map(|slab| quantizer.dequantize(slab))
        .collect();
    let views: Vec<ArrayView<'_, F, D>> = decoded.iter().map(|a| a.view()).collect();
    let trailing = Axis(decoded[0].ndim());
    Ok(ndarray::stack(trailing, &views)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatpack_codec::{LinearQuantizer, LogQuantizer};
    use floatpack_core::{QuantizedBuffer, U16, U8};
    use ndarray::{arr2, Array2, Array3, Ix1};

    #[test]
    fn test_axis_out_of_bounds() {
        let data = Array2::<f64>::zeros((3, 4));
        let q = LinearQuantizer::new();
        let err = quantize_slabs::<U8, _, _, _>(&q, &data, Axis(2));
        assert!(matches!(
            err,
            Err(SlabError::AxisOutOfBounds { axis: 2, rank: 2 })
        ));
    }

    #[test]
    fn test_per_slab_metadata_is_independent() {
        // rows with very different ranges each use their full code range
        let data = arr2(&[[0.0f64, 1.0], [100.0, 300.0]]);
        let q = LinearQuantizer::new();
        let coll = quantize_slabs::<U8, _, _, _>(&q, &data, Axis(0)).unwrap();
        assert_eq!(coll.len(), 2);

        let first = coll.get(0).unwrap();
        let second = coll.get(1).unwrap();
        assert_eq!((first.lo(), first.hi()), (0.0, 1.0));
        assert_eq!((second.lo(), second.hi()), (100.0, 300.0));
        assert_eq!(first.get(1), Some(255));
        assert_eq!(second.get(1), Some(255));
    }

    #[test]
    fn test_decoded_axis_moves_to_the_back() {
        let data = arr2(&[[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let q = LinearQuantizer::new();

        // slicing along axis 0 leaves columns; the stacked result is
        // (ncols, nrows), the transpose of the source
        let coll = quantize_slabs::<U16, _, _, _>(&q, &data, Axis(0)).unwrap();
        let out: Array2<f64> = dequantize_slabs(&q, &coll).unwrap();
        assert_eq!(out.shape(), &[3, 2]);

        let restored = out.permuted_axes([1, 0]);
        for (x, y) in data.iter().zip(restored.iter()) {
            assert!((x - y).abs() < 1e-3, "{} vs {}", x, y);
        }
    }

    #[test]
    fn test_trailing_axis_roundtrip_is_identity_shaped() {
        // slicing along the last axis already leaves the remaining axes in
        // source order, so restacking reproduces the source shape directly
        let data = arr2(&[[1.0f64, 2.0], [3.0, 4.0]]);
        let q = LinearQuantizer::new();
        let coll = quantize_slabs::<U16, _, _, _>(&q, &data, Axis(1)).unwrap();
        let out: Array2<f64> = dequantize_slabs(&q, &coll).unwrap();
        assert_eq!(out.shape(), data.shape());
    }

    #[test]
    fn test_3d_log_slab_roundtrip() {
        let data = Array3::from_shape_fn((4, 3, 5), |(i, j, k)| {
            if (i + j + k) % 7 == 0 {
                0.0f64
            } else {
                ((i + 1) * (j + 2)) as f64 * 0.5 + k as f64 * 0.01
            }
        });
        let q = LogQuantizer::new();
        let coll = quantize_slabs::<U16, _, _, _>(&q, &data, Axis(1)).unwrap();
        assert_eq!(coll.len(), 3);
        assert_eq!(coll.slab_shape(), Some(&[4usize, 5][..]));

        let out: Array3<f64> = dequantize_slabs(&q, &coll).unwrap();
        assert_eq!(out.shape(), &[4, 5, 3]);

        // axis 1 was quantized; decoded order is (0, 2, 1)
        let restored = out.permuted_axes([0, 2, 1]);
        for ((idx, &x), &y) in data.indexed_iter().zip(restored.iter()) {
            if x == 0.0 {
                assert_eq!(y, 0.0, "zero lost at {:?}", idx);
            } else {
                let rel = ((x.ln() - y.ln()).abs()).exp() - 1.0;
                assert!(rel < 1e-2, "{:?}: {} vs {}", idx, x, y);
            }
        }
    }

    #[test]
    fn test_empty_collection_fails_to_reassemble() {
        let coll = SlabCollection::<U8, Ix1>::from_slabs(vec![]).unwrap();
        let q = LinearQuantizer::new();
        let err: Result<Array2<f64>, _> = dequantize_slabs(&q, &coll);
        assert!(matches!(err, Err(SlabError::EmptyCollection)));
    }

    #[test]
    fn test_invalid_slice_fails_whole_encode() {
        let mut data = Array2::<f64>::zeros((2, 3));
        data[[1, 1]] = f64::NAN;
        let q = LinearQuantizer::new();
        let err = quantize_slabs::<U8, _, _, _>(&q, &data, Axis(0));
        assert!(matches!(err, Err(SlabError::Codec(_))));
    }

    #[test]
    fn test_collection_preserves_source_order() {
        let data = arr2(&[[0.0f64, 1.0], [10.0, 11.0], [20.0, 21.0]]);
        let q = LinearQuantizer::new();
        let coll = quantize_slabs::<U8, _, _, _>(&q, &data, Axis(0)).unwrap();
        let lows: Vec<f64> = coll.iter().map(QuantizedBuffer::lo).collect();
        assert_eq!(lows, vec![0.0, 10.0, 20.0]);
    }
}
