//! # floatpack-codec
//!
//! The two elementary codecs:
//! - [`LinearQuantizer`]: affine remap of a value range onto the full
//!   integer range of the target kind
//! - [`LogQuantizer`]: uniform remap in log-space with code 0 reserved for
//!   exact zero and two selectable rounding-offset policies
//!
//! Each module also carries bit-width convenience wrappers
//! (`linear::quantize_u8` … `linear::quantize_i32`, `log::quantize_u8` …
//! `log::quantize_u32`) and a `dequantize` helper returning the kind's
//! default float type.

pub mod linear;
pub mod log;

pub use linear::LinearQuantizer;
pub use log::LogQuantizer;
