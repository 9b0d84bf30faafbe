//! 3x3 matrix type for color space transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! This matches the numpy `M @ v` convention the golden reference values
//! were derived with.

use crate::Rgb;
use std::ops::{Index, Mul};

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. The pipeline's matrices are fixed published
/// coefficient tables, so only `const` construction and matrix-vector
/// multiplication are provided; there is no runtime inversion.
///
/// # Example
///
/// ```rust
/// use pipecheck_math::{Mat3, Rgb};
///
/// let scale = Mat3::from_rows([
///     [2.0, 0.0, 0.0],
///     [0.0, 2.0, 0.0],
///     [0.0, 0.0, 2.0],
/// ]);
/// assert_eq!(scale * Rgb::new(1.0, 2.0, 3.0), Rgb::new(2.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Returns a row as an array.
    #[inline]
    pub const fn row(&self, i: usize) -> [f32; 3] {
        self.m[i]
    }

    /// Transforms a color by this matrix (`M * v`, column-vector convention).
    #[inline]
    pub fn transform(&self, v: Rgb) -> Rgb {
        Rgb::new(
            self.m[0][0] * v.r + self.m[0][1] * v.g + self.m[0][2] * v.b,
            self.m[1][0] * v.r + self.m[1][1] * v.g + self.m[1][2] * v.b,
            self.m[2][0] * v.r + self.m[2][1] * v.g + self.m[2][2] * v.b,
        )
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Rgb
impl Mul<Rgb> for Mat3 {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: Rgb) -> Rgb {
        self.transform(rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.m[i]
    }
}
