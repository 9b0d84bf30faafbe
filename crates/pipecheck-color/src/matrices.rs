//! Fixed color space conversion matrices.
//!
//! These are the published coefficient tables the pipeline under test
//! bakes into its shaders (extracted from the WGSL column-major tables by
//! transposing), reproduced here verbatim. Downstream verification
//! tolerances go as low as 1e-4, so the coefficients must not be
//! re-derived or rounded differently.
//!
//! # Convention
//!
//! Row-major, column-vector: `out = M * in` with
//! `out[i] = sum_j M[i][j] * in[j]`.
//!
//! The directional pairs (AP1/Rec.709, Rec.2020/Rec.709) come from
//! independently published tables and are near-inverse, not exactly
//! inverse; round-trip error is bounded by ~1e-4.

use pipecheck_math::Mat3;

/// ACEScg (AP1 primaries) to Linear Rec.709.
pub const AP1_TO_REC709: Mat3 = Mat3::from_rows([
    [1.7048586, -0.6217160, -0.0831426],
    [-0.1300768, 1.1407357, -0.0106589],
    [-0.0239640, -0.1289755, 1.1529395],
]);

/// Linear Rec.709 to ACEScg (AP1 primaries).
pub const REC709_TO_AP1: Mat3 = Mat3::from_rows([
    [0.6131324, 0.3395381, 0.0473296],
    [0.0701934, 0.9163539, 0.0134527],
    [0.0206155, 0.1095697, 0.8698148],
]);

/// Linear Rec.2020 to Linear Rec.709.
pub const REC2020_TO_REC709: Mat3 = Mat3::from_rows([
    [1.6604910, -0.5876411, -0.0728499],
    [-0.1245505, 1.1328999, -0.0083494],
    [-0.0181508, -0.1005789, 1.1187297],
]);

/// Linear Rec.709 to Linear Rec.2020.
pub const REC709_TO_REC2020: Mat3 = Mat3::from_rows([
    [0.6274039, 0.3292830, 0.0433131],
    [0.0690973, 0.9195404, 0.0113623],
    [0.0163914, 0.0880133, 0.8955953],
]);

/// ACES Fit input matrix (Rec.709 to the fitted RRT working space).
///
/// Part of Stephen Hill's fitted ACES curve, BT.709 path. Only valid
/// paired with [`ACES_OUTPUT`] around the rational tone curve.
pub const ACES_INPUT: Mat3 = Mat3::from_rows([
    [0.59719, 0.35458, 0.04823],
    [0.07600, 0.90834, 0.01566],
    [0.02840, 0.13383, 0.83777],
]);

/// ACES Fit output matrix (fitted RRT working space back to Rec.709).
pub const ACES_OUTPUT: Mat3 = Mat3::from_rows([
    [1.60475, -0.53108, -0.07367],
    [-0.10208, 1.10813, -0.00605],
    [-0.00327, -0.07276, 1.07602],
]);
