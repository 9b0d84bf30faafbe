//! Reference generator: evaluates the stage model over the test-point
//! table and freezes the results into a [`Fixture`].
//!
//! This runs only on demand (the `generate` CLI subcommand), never as
//! part of verification. The seven canonical scenarios cover every
//! stage/operator combination the pipeline exercises; their names,
//! settings, descriptions and tolerances are part of the frozen contract
//! and must not drift.

use crate::model::{ExpectedRgb, Fixture, Scenario};
use crate::points::{TEST_POINTS, test_point_table};
use pipecheck_color::stages::{
    self, ColorGradeSettings, DisplayRemapSettings, InputConvertSettings, OutputEncodeSettings,
    TonemapSettings,
};
use pipecheck_math::Rgb;
use serde::Serialize;
use std::collections::BTreeMap;

/// Evaluates one stage function over the whole test-point table.
fn results_for(stage_fn: impl Fn(Rgb) -> Rgb) -> BTreeMap<String, ExpectedRgb> {
    TEST_POINTS
        .iter()
        .map(|&(name, c)| (name.to_string(), ExpectedRgb::from(stage_fn(c))))
        .collect()
}

/// Freezes one scenario: settings serialize to their wire form.
fn scenario<S: Serialize>(
    settings: &S,
    description: &str,
    tolerance: f32,
    results: BTreeMap<String, ExpectedRgb>,
) -> Scenario {
    // Settings structs always serialize to a JSON object.
    let settings = serde_json::to_value(settings).expect("settings serialize");
    Scenario {
        settings,
        description: description.to_string(),
        tolerance,
        results,
    }
}

/// Builds the complete golden reference fixture.
///
/// Tolerances are stage-specific: matrix and remap stages are tight
/// (1e-4), transfer-curve stages allow 1e-3, and the strongly nonlinear
/// ACES Fit gets the loosest bound (1e-2).
pub fn reference_fixture() -> Fixture {
    let mut stage_expected = BTreeMap::new();

    let acescg_in = InputConvertSettings { input_space: 2 };
    stage_expected.insert(
        "stage4_inputConvert_ACEScg".to_string(),
        scenario(
            &acescg_in,
            "ACEScg (AP1) -> Linear Rec.709 via AP1_to_Rec709 matrix",
            0.0001,
            results_for(|c| stages::input_convert(c, &acescg_in)),
        ),
    );

    let grade_defaults = ColorGradeSettings::default();
    stage_expected.insert(
        "stage5_colorGrade_defaults".to_string(),
        scenario(
            &grade_defaults,
            "Default grading settings = passthrough",
            0.001,
            results_for(|c| stages::color_grade(c, &grade_defaults)),
        ),
    );

    let aces_fit = TonemapSettings {
        tonemap_op: 1,
        ..Default::default()
    };
    stage_expected.insert(
        "stage6_rrt_acesFit".to_string(),
        scenario(
            &aces_fit,
            "ACES Fit tonemap (Stephen Hill), BT.709 path",
            0.01,
            results_for(|c| stages::tonemap(c, &aces_fit)),
        ),
    );

    let reinhard = TonemapSettings {
        tonemap_op: 9,
        ..Default::default()
    };
    stage_expected.insert(
        "stage6_rrt_reinhard".to_string(),
        scenario(
            &reinhard,
            "Reinhard tonemap: color / (color + 1)",
            0.001,
            results_for(|c| stages::tonemap(c, &reinhard)),
        ),
    );

    let srgb_out = OutputEncodeSettings {
        output_space: 5,
        tonemap_op: 0,
    };
    stage_expected.insert(
        "stage8_outputEncode_srgb".to_string(),
        scenario(
            &srgb_out,
            "Linear Rec.709 -> sRGB (IEC 61966-2-1)",
            0.001,
            results_for(|c| stages::output_encode(c, &srgb_out)),
        ),
    );

    let remap = DisplayRemapSettings {
        black_level: 0.05,
        white_level: 0.95,
    };
    stage_expected.insert(
        "stage9_displayRemap".to_string(),
        scenario(
            &remap,
            "Linear remap: black + color * (white - black)",
            0.0001,
            results_for(|c| stages::display_remap(c, &remap)),
        ),
    );

    let remap_default = DisplayRemapSettings::default();
    stage_expected.insert(
        "stage9_displayRemap_default".to_string(),
        scenario(
            &remap_default,
            "Default remap = identity passthrough",
            0.0001,
            results_for(|c| stages::display_remap(c, &remap_default)),
        ),
    );

    Fixture {
        test_points: test_point_table(),
        stage_expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_scenarios() {
        let fixture = reference_fixture();
        let names: Vec<_> = fixture.stage_expected.keys().cloned().collect();
        assert_eq!(
            names,
            vec![
                "stage4_inputConvert_ACEScg",
                "stage5_colorGrade_defaults",
                "stage6_rrt_acesFit",
                "stage6_rrt_reinhard",
                "stage8_outputEncode_srgb",
                "stage9_displayRemap",
                "stage9_displayRemap_default",
            ]
        );
    }

    #[test]
    fn test_every_scenario_covers_every_point() {
        let fixture = reference_fixture();
        for (name, scenario) in &fixture.stage_expected {
            assert!(scenario.tolerance > 0.0, "{} tolerance", name);
            assert_eq!(scenario.results.len(), 4, "{} results", name);
            for (point, _) in TEST_POINTS {
                assert!(scenario.results.contains_key(point), "{} missing {}", name, point);
            }
        }
    }

    #[test]
    fn test_identity_scenarios_match_inputs() {
        // stage5 defaults and stage9 defaults are exact identities.
        let fixture = reference_fixture();
        for name in ["stage5_colorGrade_defaults", "stage9_displayRemap_default"] {
            let scenario = &fixture.stage_expected[name];
            for (point, input) in TEST_POINTS {
                assert_eq!(scenario.results[point].rgb(), input, "{}/{}", name, point);
            }
        }
    }

    #[test]
    fn test_remap_midgray_value() {
        let fixture = reference_fixture();
        let out = fixture.stage_expected["stage9_displayRemap"].results["midgray"].rgb();
        // 0.05 + 0.18 * 0.9
        assert!(out.max_abs_diff(Rgb::splat(0.212)) <= 1e-4);
    }

    #[test]
    fn test_settings_wire_form() {
        let fixture = reference_fixture();
        let s = &fixture.stage_expected["stage4_inputConvert_ACEScg"].settings;
        assert_eq!(s["inputSpace"], 2);
        let s = &fixture.stage_expected["stage9_displayRemap"].settings;
        // f32 widens to f64 in the Value, so compare after narrowing back.
        assert_eq!(s["blackLevel"].as_f64().unwrap() as f32, 0.05);
        assert_eq!(s["whiteLevel"].as_f64().unwrap() as f32, 0.95);
    }
}
