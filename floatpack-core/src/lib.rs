//! # floatpack-core
//!
//! Core types for lossy quantization of float arrays into fixed-width
//! integer codes.
//!
//! Key types:
//! - [`CodeKind`]: closed set of integer code kinds (u8/u16/u24/u32 and
//!   signed counterparts) as zero-sized descriptors
//! - [`QuantizedBuffer`]: owned N-dimensional code array plus the two-scalar
//!   reconstruction range
//! - [`Quantizer`]: the encode/decode seam implemented by the codec crates
//! - [`RoundMode`]: rounding-offset policy for the logarithmic codec
//!
//! All transforms are pure and deterministic: identical input and options
//! always produce identical output.

pub mod buffer;
pub mod error;
pub mod kind;
pub mod quantizer;
pub mod round;

pub use buffer::QuantizedBuffer;
pub use error::CodecError;
pub use kind::{CodeKind, Real, UnsignedKind, I16, I24, I32, I8, U16, U24, U32, U8};
pub use quantizer::Quantizer;
pub use round::RoundMode;
