//! Tonemap operators: HDR linear color to a bounded displayable range.
//!
//! Operator selection is by integer code. The numbering is defined by the
//! pipeline under test and is part of the fixture contract, so it must be
//! preserved exactly: 0 = none, 1 = ACES Fit, 9 = Reinhard. Codes in
//! between belong to operators this checker does not model.

use crate::matrices::{ACES_INPUT, ACES_OUTPUT};
use pipecheck_math::Rgb;

/// Tonemap operator selector, mapped from the pipeline's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonemapOp {
    /// Code 0: identity, no tonemapping.
    None,
    /// Code 1: ACES Fit (Stephen Hill), BT.709 path.
    AcesFit,
    /// Code 9: Reinhard, `c / (c + 1)`.
    Reinhard,
}

impl TonemapOp {
    /// Maps a pipeline operator code to an operator.
    ///
    /// Returns `None` for codes this checker does not model; callers fall
    /// back to passthrough, never an error.
    #[inline]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::AcesFit),
            9 => Some(Self::Reinhard),
            _ => None,
        }
    }

    /// The pipeline's integer code for this operator.
    #[inline]
    pub fn code(self) -> u32 {
        match self {
            Self::None => 0,
            Self::AcesFit => 1,
            Self::Reinhard => 9,
        }
    }

    /// Applies the operator to a linear color.
    #[inline]
    pub fn apply(self, c: Rgb) -> Rgb {
        match self {
            Self::None => c,
            Self::AcesFit => aces_fit(c),
            Self::Reinhard => reinhard(c),
        }
    }
}

/// ACES Fit tonemap (Stephen Hill / BakingLab), BT.709 path.
///
/// Transforms through the fitted RRT working space, applies the rational
/// tone curve per channel, transforms back and clamps to `[0, 1]`:
///
/// ```text
/// v  = ACES_INPUT * c
/// a  = v * (v + 0.0245786) - 0.000090537
/// b  = v * (0.983729 * v + 0.4329510) + 0.238081
/// v' = a / b
/// out = clamp01(ACES_OUTPUT * v')
/// ```
///
/// The clamp holds for any input magnitude; the curve itself is the most
/// numerically sensitive part of the whole checker.
pub fn aces_fit(c: Rgb) -> Rgb {
    let v = ACES_INPUT * c;
    let curved = v.map(|x| {
        let a = x * (x + 0.0245786) - 0.000090537;
        let b = x * (0.983729 * x + 0.4329510) + 0.238081;
        a / b
    });
    (ACES_OUTPUT * curved).clamp01()
}

/// Reinhard tonemap: `c / (c + 1)` per channel.
///
/// Unclamped; non-negative input maps into `[0, 1)`, asymptotic to 1.
#[inline]
pub fn reinhard(c: Rgb) -> Rgb {
    c.map(|x| x / (x + 1.0))
}
