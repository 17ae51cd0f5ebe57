//! # floatpack-slab
//!
//! Per-axis slab driver. Quantizes each `(N-1)`-dimensional slice along a
//! chosen axis independently — every slab carries its own range metadata,
//! trading a little overhead for per-slice dynamic range — and reassembles
//! decoded slabs into one rank-`N` array.
//!
//! Key items:
//! - [`quantize_slabs`] / [`dequantize_slabs`]: the generic driver, usable
//!   with either elementary codec
//! - [`SlabCollection`]: ordered per-slice buffers with uniform shape
//!
//! Reassembly stacks along a **new trailing axis**, not the original axis
//! position; callers who need the source order permute the result.

pub mod collection;
pub mod driver;
pub mod error;

pub use collection::SlabCollection;
pub use driver::{dequantize_slabs, quantize_slabs};
pub use error::SlabError;
