//! sRGB transfer function (IEC 61966-2-1).
//!
//! Piecewise curve: a linear segment near black, a power curve
//! (approximately gamma 2.2) above it. Applied independently per channel;
//! alpha is never encoded.
//!
//! The branch threshold and constants (12.92, 1.055, 0.055, exponent
//! 1/2.4) are part of the verification contract: near-black tolerances
//! are as tight as 1e-3, where the linear segment dominates.

use pipecheck_math::Rgb;

/// sRGB OETF: encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use pipecheck_color::srgb;
///
/// assert_eq!(srgb::oetf(0.0), 0.0);
/// assert!((srgb::oetf(1.0) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// sRGB EOTF: decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the sRGB OETF to each channel of a color.
#[inline]
pub fn oetf_rgb(c: Rgb) -> Rgb {
    c.map(oetf)
}

/// Applies the sRGB EOTF to each channel of a color.
#[inline]
pub fn eotf_rgb(c: Rgb) -> Rgb {
    c.map(eotf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_branch_continuity() {
        // Both branches must agree at the threshold, otherwise near-black
        // verification values straddle a discontinuity.
        let t = 0.0031308_f32;
        let linear = t * 12.92;
        let power = 1.055 * t.powf(1.0 / 2.4) - 0.055;
        assert!((linear - power).abs() < 1e-6, "discontinuity: {} vs {}", linear, power);
    }

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-5, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_midgray() {
        use approx::assert_relative_eq;
        // 18% gray encodes to roughly 0.46
        assert_relative_eq!(oetf(0.18), 0.4613561, epsilon = 1e-4);
        assert_relative_eq!(eotf(0.4613561), 0.18, epsilon = 1e-4);
    }

    #[test]
    fn test_rgb_helpers() {
        let c = pipecheck_math::Rgb::new(0.0, 0.18, 1.0);
        let enc = oetf_rgb(c);
        assert_eq!(enc.r, 0.0);
        assert!((enc.g - oetf(0.18)).abs() < 1e-7);
        let dec = eotf_rgb(enc);
        assert!(dec.max_abs_diff(c) < 1e-5);
    }
}
