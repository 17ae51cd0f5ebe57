//! Integer code kinds and the float sample types they quantize.
//!
//! The eight kinds form a closed set; min/max-representable arithmetic is
//! kept explicit in `f64` so the affine range mapping never depends on
//! numeric promotion rules. The 24-bit kinds store their codes in 32-bit
//! containers but keep 24-bit bounds.

use std::fmt::Debug;

/// Float sample type accepted by the codecs and produced by decoding.
///
/// All internal arithmetic happens in `f64`; `f32` samples are widened on
/// the way in and narrowed on the way out.
pub trait Real: Copy + Debug + PartialOrd + Send + Sync + 'static {
    fn to_f64(self) -> f64;
    fn from_f64(x: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl Real for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
}

/// Descriptor for one fixed-width integer code kind.
///
/// `MIN`/`MAX` are the extreme representable code values as `f64`; both are
/// exactly representable (the widest kind needs 32 bits, well under the 53
/// bits of an `f64` mantissa). `DefaultFloat` is the decode output type used
/// by the bit-width wrappers: `f32` for the 8/16/24-bit kinds, `f64` for the
/// 32-bit kinds whose dynamic range needs the extra mantissa bits.
pub trait CodeKind: Copy + Debug + Send + Sync + 'static {
    /// In-memory representation of one code.
    type Repr: Copy + Debug + PartialEq + Send + Sync + 'static;
    /// Decode output type chosen by the convenience wrappers.
    type DefaultFloat: Real;

    const BITS: u32;
    const SIGNED: bool;
    /// Smallest representable code value, as `f64`.
    const MIN: f64;
    /// Largest representable code value, as `f64`.
    const MAX: f64;

    /// Saturating cast: clamps into `[MIN, MAX]` and truncates toward the
    /// nearest representable code. NaN collapses to the container's zero.
    fn saturate(x: f64) -> Self::Repr;

    /// Widen one code to `f64` (always exact).
    fn to_f64(code: Self::Repr) -> f64;
}

/// Marker for the unsigned kinds; the logarithmic codec only accepts these.
pub trait UnsignedKind: CodeKind {}

/// Unsigned 8-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U8;

/// Unsigned 16-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U16;

/// Unsigned 24-bit codes, stored in `u32` containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U24;

/// Unsigned 32-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U32;

/// Signed 8-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I8;

/// Signed 16-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I16;

/// Signed 24-bit codes, stored in `i32` containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I24;

/// Signed 32-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I32;

impl CodeKind for U8 {
    type Repr = u8;
    type DefaultFloat = f32;
    const BITS: u32 = 8;
    const SIGNED: bool = false;
    const MIN: f64 = 0.0;
    const MAX: f64 = u8::MAX as f64;

    #[inline]
    fn saturate(x: f64) -> u8 {
        x.clamp(Self::MIN, Self::MAX) as u8
    }
    #[inline]
    fn to_f64(code: u8) -> f64 {
        code as f64
    }
}
impl UnsignedKind for U8 {}

impl CodeKind for U16 {
    type Repr = u16;
    type DefaultFloat = f32;
    const BITS: u32 = 16;
    const SIGNED: bool = false;
    const MIN: f64 = 0.0;
    const MAX: f64 = u16::MAX as f64;

    #[inline]
    fn saturate(x: f64) -> u16 {
        x.clamp(Self::MIN, Self::MAX) as u16
    }
    #[inline]
    fn to_f64(code: u16) -> f64 {
        code as f64
    }
}
impl UnsignedKind for U16 {}

impl CodeKind for U24 {
    type Repr = u32;
    type DefaultFloat = f32;
    const BITS: u32 = 24;
    const SIGNED: bool = false;
    const MIN: f64 = 0.0;
    const MAX: f64 = 16_777_215.0;

    #[inline]
    fn saturate(x: f64) -> u32 {
        x.clamp(Self::MIN, Self::MAX) as u32
    }
    #[inline]
    fn to_f64(code: u32) -> f64 {
        code as f64
    }
}
impl UnsignedKind for U24 {}

impl CodeKind for U32 {
    type Repr = u32;
    type DefaultFloat = f64;
    const BITS: u32 = 32;
    const SIGNED: bool = false;
    const MIN: f64 = 0.0;
    const MAX: f64 = u32::MAX as f64;

    #[inline]
    fn saturate(x: f64) -> u32 {
        x.clamp(Self::MIN, Self::MAX) as u32
    }
    #[inline]
    fn to_f64(code: u32) -> f64 {
        code as f64
    }
}
impl UnsignedKind for U32 {}

impl CodeKind for I8 {
    type Repr = i8;
    type DefaultFloat = f32;
    const BITS: u32 = 8;
    const SIGNED: bool = true;
    const MIN: f64 = i8::MIN as f64;
    const MAX: f64 = i8::MAX as f64;

    #[inline]
    fn saturate(x: f64) -> i8 {
        x.clamp(Self::MIN, Self::MAX) as i8
    }
    #[inline]
    fn to_f64(code: i8) -> f64 {
        code as f64
    }
}

impl CodeKind for I16 {
    type Repr = i16;
    type DefaultFloat = f32;
    const BITS: u32 = 16;
    const SIGNED: bool = true;
    const MIN: f64 = i16::MIN as f64;
    const MAX: f64 = i16::MAX as f64;

    #[inline]
    fn saturate(x: f64) -> i16 {
        x.clamp(Self::MIN, Self::MAX) as i16
    }
    #[inline]
    fn to_f64(code: i16) -> f64 {
        code as f64
    }
}

impl CodeKind for I24 {
    type Repr = i32;
    type DefaultFloat = f32;
    const BITS: u32 = 24;
    const SIGNED: bool = true;
    const MIN: f64 = -8_388_608.0;
    const MAX: f64 = 8_388_607.0;

    #[inline]
    fn saturate(x: f64) -> i32 {
        x.clamp(Self::MIN, Self::MAX) as i32
    }
    #[inline]
    fn to_f64(code: i32) -> f64 {
        code as f64
    }
}

impl CodeKind for I32 {
    type Repr = i32;
    type DefaultFloat = f64;
    const BITS: u32 = 32;
    const SIGNED: bool = true;
    const MIN: f64 = i32::MIN as f64;
    const MAX: f64 = i32::MAX as f64;

    #[inline]
    fn saturate(x: f64) -> i32 {
        x.clamp(Self::MIN, Self::MAX) as i32
    }
    #[inline]
    fn to_f64(code: i32) -> f64 {
        code as f64
    }
}
