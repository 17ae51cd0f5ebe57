use serde::{Deserialize, Serialize};

/// Rounding-offset policy for the logarithmic codec.
///
/// Selects which domain the quantization error is minimized in. Both
/// formulas are numerically delicate near degenerate spacing and are kept
/// exactly as derived — see `LogQuantizer` for the offset expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundMode {
    /// Minimize reconstruction error measured in the original (linear)
    /// value domain. The default.
    #[default]
    LinSpace,
    /// Minimize error measured in log domain: a plain affine alignment of
    /// `logmin` onto code 1.
    LogSpace,
}
