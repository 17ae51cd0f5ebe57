use thiserror::Error;

/// Codec validation failures.
///
/// Every variant surfaces before any output is allocated — a failed encode
/// performs no partial work.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A supplied or computed linear range bound is not finite. Also raised
    /// when bounds are derived from data containing NaN/Inf, or from an
    /// empty array (no extrema exist).
    #[error("range bound is not finite: ({lo}, {hi})")]
    NonFiniteRange { lo: f64, hi: f64 },

    /// The logarithmic codec saw a negative or non-finite element.
    /// `index` is the flat offset in row-major visit order.
    #[error("value {value} at flat index {index} is negative or not finite")]
    NegativeOrNonFinite { value: f64, index: usize },

    /// A code handed to `QuantizedBuffer::from_parts` lies outside the
    /// kind's representable range (only possible for the 24-bit kinds,
    /// whose containers are wider than their range).
    #[error("stored code at flat index {index} exceeds the {bits}-bit range")]
    CodeOutOfRange { index: usize, bits: u32 },
}
