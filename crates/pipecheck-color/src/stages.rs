//! The five verifiable pipeline stages.
//!
//! Each stage is a pure function `(Rgb, &Settings) -> Rgb`, applied
//! independently per test point. Settings are typed structs with the
//! pipeline's camelCase field names on the wire and documented defaults;
//! the integer space/operator codes are externally defined by the
//! pipeline and must be preserved exactly.
//!
//! Unrecognized codes always resolve to the nearest passthrough behavior,
//! never an error: the checker's job is to verify the codes it models,
//! not to police the ones it doesn't.

use crate::matrices::{AP1_TO_REC709, REC2020_TO_REC709};
use crate::srgb;
use crate::tonemap::TonemapOp;
use pipecheck_math::Rgb;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Space code mappings
// ---------------------------------------------------------------------------

/// Input color space selector for stage 4, mapped from pipeline codes.
///
/// Codes 3/4/6/7 belong to spaces the checker does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSpace {
    /// Code 0: Linear Rec.709, passthrough.
    Rec709,
    /// Code 1: Linear Rec.2020.
    Rec2020,
    /// Code 2: ACEScg (AP1 primaries).
    AcesCg,
    /// Code 5: sRGB encoded (Rec.709 primaries).
    Srgb,
}

impl InputSpace {
    /// Maps a pipeline input-space code; `None` means passthrough.
    #[inline]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Rec709),
            1 => Some(Self::Rec2020),
            2 => Some(Self::AcesCg),
            5 => Some(Self::Srgb),
            _ => None,
        }
    }
}

/// Output color space selector for stage 8, mapped from pipeline codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSpace {
    /// Code 0: Linear Rec.709, passthrough.
    Rec709,
    /// Code 5: sRGB (clamp to [0,1], then OETF).
    Srgb,
}

impl OutputSpace {
    /// Maps a pipeline output-space code; `None` means passthrough.
    #[inline]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Rec709),
            5 => Some(Self::Srgb),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-stage settings
// ---------------------------------------------------------------------------

/// Stage 4 settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InputConvertSettings {
    /// Source color space code (0 Rec.709, 1 Rec.2020, 2 ACEScg, 5 sRGB).
    pub input_space: u32,
}

/// Stage 5 settings.
///
/// Only exposure is exercised by the current pipeline math; the grading
/// space, contrast and saturation fields travel through the fixture but
/// are not applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorGradeSettings {
    /// Working space code for grading (carried, not applied).
    pub grading_space: u32,
    /// Exposure in stops; the color is scaled by `2^exposure`.
    pub exposure: f32,
    /// Contrast (carried, not applied). Default 1.0.
    pub contrast: f32,
    /// Saturation (carried, not applied). Default 1.0.
    pub saturation: f32,
}

impl Default for ColorGradeSettings {
    fn default() -> Self {
        Self {
            grading_space: 0,
            exposure: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }
}

/// Stage 6 settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TonemapSettings {
    /// Tonemap operator code (0 none, 1 ACES Fit, 9 Reinhard).
    pub tonemap_op: u32,
    /// Pre-tonemap exposure in stops.
    pub tonemap_exposure: f32,
    /// White point for operators that take one (carried, not applied by
    /// the modeled operators). Default 4.0.
    pub white_point: f32,
}

impl Default for TonemapSettings {
    fn default() -> Self {
        Self {
            tonemap_op: 0,
            tonemap_exposure: 0.0,
            white_point: 4.0,
        }
    }
}

/// Stage 8 settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputEncodeSettings {
    /// Target encoding code (0 linear Rec.709, 5 sRGB).
    pub output_space: u32,
    /// Tonemap operator code the pipeline applied upstream (carried,
    /// selects no behavior here).
    pub tonemap_op: u32,
}

/// Stage 9 settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayRemapSettings {
    /// Output black level. Default 0.0.
    pub black_level: f32,
    /// Output white level. Default 1.0.
    pub white_level: f32,
}

impl Default for DisplayRemapSettings {
    fn default() -> Self {
        Self {
            black_level: 0.0,
            white_level: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Stage functions
// ---------------------------------------------------------------------------

/// Stage 4: input convert — source color space to Linear Rec.709.
pub fn input_convert(c: Rgb, settings: &InputConvertSettings) -> Rgb {
    match InputSpace::from_code(settings.input_space) {
        Some(InputSpace::Rec709) | None => c,
        Some(InputSpace::Rec2020) => REC2020_TO_REC709 * c,
        Some(InputSpace::AcesCg) => AP1_TO_REC709 * c,
        Some(InputSpace::Srgb) => srgb::eotf_rgb(c),
    }
}

/// Stage 5: color grade.
///
/// Applies exposure as `c * 2^exposure`. With the default settings this
/// stage is an exact identity, which the verification fixture checks as a
/// regression guard.
pub fn color_grade(c: Rgb, settings: &ColorGradeSettings) -> Rgb {
    c * settings.exposure.exp2()
}

/// Stage 6: RRT / tonemap.
///
/// Exposure-scales the color by `2^tonemapExposure`, then dispatches to
/// the selected operator. Unrecognized operator codes return the
/// exposure-scaled color unmodified.
pub fn tonemap(c: Rgb, settings: &TonemapSettings) -> Rgb {
    let c = c * settings.tonemap_exposure.exp2();
    match TonemapOp::from_code(settings.tonemap_op) {
        Some(op) => op.apply(c),
        None => c,
    }
}

/// Stage 8: output encode.
///
/// sRGB output clamps each channel to `[0, 1]` before encoding; linear
/// Rec.709 output (and any unrecognized code) passes through.
pub fn output_encode(c: Rgb, settings: &OutputEncodeSettings) -> Rgb {
    match OutputSpace::from_code(settings.output_space) {
        Some(OutputSpace::Srgb) => srgb::oetf_rgb(c.clamp01()),
        Some(OutputSpace::Rec709) | None => c,
    }
}

/// Stage 9: display remap — `black + c * (white - black)`.
///
/// With the default levels (0, 1) this stage is an exact identity, also
/// held as a regression guard.
pub fn display_remap(c: Rgb, settings: &DisplayRemapSettings) -> Rgb {
    let scale = settings.white_level - settings.black_level;
    Rgb::splat(settings.black_level) + c * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [Rgb; 4] = [
        Rgb::new(0.18, 0.18, 0.18),
        Rgb::new(1.0, 1.0, 1.0),
        Rgb::new(5.0, 3.0, 1.0),
        Rgb::new(0.01, 0.005, 0.008),
    ];

    #[test]
    fn test_input_convert_passthrough_codes() {
        // Code 0 and every unmodeled code pass through unchanged.
        for code in [0, 3, 4, 6, 7, 42] {
            let settings = InputConvertSettings { input_space: code };
            for c in POINTS {
                assert_eq!(input_convert(c, &settings), c);
            }
        }
    }

    #[test]
    fn test_input_convert_acescg() {
        let settings = InputConvertSettings { input_space: 2 };
        let out = input_convert(Rgb::new(0.18, 0.18, 0.18), &settings);
        let expected = crate::matrices::AP1_TO_REC709 * Rgb::splat(0.18);
        assert_eq!(out, expected);
        // AP1 gray maps to Rec.709 gray (rows sum to ~1)
        assert!(out.max_abs_diff(Rgb::splat(0.18)) < 1e-4);
    }

    #[test]
    fn test_input_convert_srgb_decodes() {
        use approx::assert_relative_eq;
        let settings = InputConvertSettings { input_space: 5 };
        let out = input_convert(Rgb::splat(0.5), &settings);
        assert_relative_eq!(out.r, 0.2140411, epsilon = 1e-5);
    }

    #[test]
    fn test_color_grade_default_identity() {
        let settings = ColorGradeSettings::default();
        for c in POINTS {
            assert_eq!(color_grade(c, &settings), c);
        }
    }

    #[test]
    fn test_color_grade_exposure_stops() {
        let settings = ColorGradeSettings {
            exposure: 1.0,
            ..Default::default()
        };
        assert_eq!(color_grade(Rgb::splat(0.25), &settings), Rgb::splat(0.5));
        let down = ColorGradeSettings {
            exposure: -2.0,
            ..Default::default()
        };
        assert_eq!(color_grade(Rgb::splat(1.0), &down), Rgb::splat(0.25));
    }

    #[test]
    fn test_tonemap_unknown_op_passthrough() {
        let settings = TonemapSettings {
            tonemap_op: 7,
            ..Default::default()
        };
        for c in POINTS {
            assert_eq!(tonemap(c, &settings), c);
        }
    }

    #[test]
    fn test_tonemap_exposure_applies_before_operator() {
        let settings = TonemapSettings {
            tonemap_op: 9,
            tonemap_exposure: 1.0,
            ..Default::default()
        };
        // Reinhard of 2x input: 2c / (2c + 1)
        let out = tonemap(Rgb::splat(0.5), &settings);
        assert!((out.r - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_output_encode_srgb_clamps_first() {
        let settings = OutputEncodeSettings {
            output_space: 5,
            tonemap_op: 0,
        };
        // HDR input clamps to 1.0 before encoding, so it encodes to 1.0.
        let out = output_encode(Rgb::new(5.0, 3.0, 1.0), &settings);
        assert!((out.r - 1.0).abs() < 1e-6);
        assert!((out.g - 1.0).abs() < 1e-6);
        assert!((out.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_output_encode_linear_passthrough() {
        let settings = OutputEncodeSettings::default();
        for c in POINTS {
            assert_eq!(output_encode(c, &settings), c);
        }
    }

    #[test]
    fn test_display_remap_default_identity() {
        let settings = DisplayRemapSettings::default();
        for c in POINTS {
            assert_eq!(display_remap(c, &settings), c);
        }
    }

    #[test]
    fn test_display_remap_custom_levels() {
        let settings = DisplayRemapSettings {
            black_level: 0.05,
            white_level: 0.95,
        };
        // 0.05 + 0.18 * 0.9 = 0.212
        let out = display_remap(Rgb::splat(0.18), &settings);
        assert!(out.max_abs_diff(Rgb::splat(0.212)) <= 1e-4);
    }

    #[test]
    fn test_settings_wire_names() {
        let json = serde_json::to_value(TonemapSettings::default()).unwrap();
        assert!(json.get("tonemapOp").is_some());
        assert!(json.get("tonemapExposure").is_some());
        assert!(json.get("whitePoint").is_some());
        // Omitted fields deserialize to documented defaults.
        let parsed: DisplayRemapSettings = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parsed, DisplayRemapSettings::default());
    }
}
