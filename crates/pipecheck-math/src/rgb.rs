//! RGB color triple.
//!
//! [`Rgb`] represents one linear (or encoded) color sample. It is a plain
//! value type: every pipeline stage takes an `Rgb` and returns a new one.
//!
//! # Components
//!
//! Access via `.r`, `.g`, `.b` or index `[0]`, `[1]`, `[2]`.

use std::ops::{Add, Div, Index, Mul, Sub};

/// An RGB color triple.
///
/// # Example
///
/// ```rust
/// use pipecheck_math::Rgb;
///
/// let c = Rgb::new(0.5, 0.25, 0.125);
/// let scaled = c * 2.0;
/// assert_eq!(scaled.r, 1.0);
/// assert_eq!(scaled.clamp01(), scaled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::splat(0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::splat(1.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color with all channels set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from a `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns the channels as a `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Applies a function to each channel independently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipecheck_math::Rgb;
    ///
    /// let c = Rgb::new(4.0, 9.0, 16.0).map(f32::sqrt);
    /// assert_eq!(c, Rgb::new(2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|v| v.clamp(0.0, 1.0))
    }

    /// Maximum per-channel absolute difference against another color.
    ///
    /// This is the metric used for golden-value comparison.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f32 {
        let dr = (self.r - other.r).abs();
        let dg = (self.g - other.g).abs();
        let db = (self.b - other.b).abs();
        dr.max(dg).max(db)
    }

    /// Returns true if all channels are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Add for Rgb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Rgb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Rgb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Div<f32> for Rgb {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl Index<usize> for Rgb {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Rgb index {} out of range", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Rgb::splat(0.5), Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(Rgb::from_array([1.0, 2.0, 3.0]).to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_arithmetic() {
        let a = Rgb::new(1.0, 2.0, 3.0);
        let b = Rgb::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Rgb::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Rgb::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Rgb::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Rgb::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_clamp01() {
        let c = Rgb::new(-0.5, 0.5, 1.5).clamp01();
        assert_eq!(c, Rgb::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_max_abs_diff() {
        use approx::assert_relative_eq;
        let a = Rgb::new(0.1, 0.2, 0.3);
        let b = Rgb::new(0.1, 0.25, 0.28);
        assert_relative_eq!(a.max_abs_diff(b), 0.05, epsilon = 1e-6);
        assert_eq!(a.max_abs_diff(a), 0.0);
    }

    #[test]
    fn test_index() {
        let c = Rgb::new(1.0, 2.0, 3.0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 2.0);
        assert_eq!(c[2], 3.0);
    }
}
