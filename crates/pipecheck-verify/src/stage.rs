//! Stage identification and dispatch.
//!
//! Scenario names carry their stage as a prefix (`stage6_rrt_acesFit` ->
//! stage 6). The set of verifiable stages is closed, so dispatch is an
//! enum rather than a string-keyed lookup table; a prefix outside the set
//! parses to `None` and the caller skips the scenario with a warning.
//! Stages 0-3 and 7 exist in the pipeline but carry no verifiable math.

use pipecheck_color::stages::{
    self, ColorGradeSettings, DisplayRemapSettings, InputConvertSettings, OutputEncodeSettings,
    TonemapSettings,
};
use pipecheck_math::Rgb;

use crate::run::VerifyError;

/// A verifiable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Stage 4: input color space to Linear Rec.709.
    InputConvert,
    /// Stage 5: color grade (exposure).
    ColorGrade,
    /// Stage 6: RRT / tonemap.
    Tonemap,
    /// Stage 8: output encoding.
    OutputEncode,
    /// Stage 9: display black/white remap.
    DisplayRemap,
}

impl Stage {
    /// All verifiable stages, in pipeline order.
    pub const ALL: [Stage; 5] = [
        Stage::InputConvert,
        Stage::ColorGrade,
        Stage::Tonemap,
        Stage::OutputEncode,
        Stage::DisplayRemap,
    ];

    /// The stage's pipeline number.
    #[inline]
    pub fn number(self) -> u32 {
        match self {
            Stage::InputConvert => 4,
            Stage::ColorGrade => 5,
            Stage::Tonemap => 6,
            Stage::OutputEncode => 8,
            Stage::DisplayRemap => 9,
        }
    }

    /// The scenario-name prefix for this stage (`stage<N>`).
    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            Stage::InputConvert => "stage4",
            Stage::ColorGrade => "stage5",
            Stage::Tonemap => "stage6",
            Stage::OutputEncode => "stage8",
            Stage::DisplayRemap => "stage9",
        }
    }

    /// Looks up a stage by pipeline number.
    pub fn from_number(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    /// Parses the stage out of a scenario name (`stage<N>_<label>`).
    ///
    /// `None` is the skip-with-warning path, not an error.
    pub fn from_scenario_name(name: &str) -> Option<Self> {
        let prefix = name.split('_').next().unwrap_or(name);
        Self::ALL.into_iter().find(|s| s.prefix() == prefix)
    }

    /// Recomputes this stage for one test point.
    ///
    /// The scenario's raw settings are parsed into the stage's typed
    /// settings struct here; a type mismatch means the fixture is
    /// malformed, which is fatal.
    pub fn evaluate(self, c: Rgb, settings: &serde_json::Value) -> Result<Rgb, VerifyError> {
        let settings = settings.clone();
        let out = match self {
            Stage::InputConvert => {
                let s: InputConvertSettings = parse(self, settings)?;
                stages::input_convert(c, &s)
            }
            Stage::ColorGrade => {
                let s: ColorGradeSettings = parse(self, settings)?;
                stages::color_grade(c, &s)
            }
            Stage::Tonemap => {
                let s: TonemapSettings = parse(self, settings)?;
                stages::tonemap(c, &s)
            }
            Stage::OutputEncode => {
                let s: OutputEncodeSettings = parse(self, settings)?;
                stages::output_encode(c, &s)
            }
            Stage::DisplayRemap => {
                let s: DisplayRemapSettings = parse(self, settings)?;
                stages::display_remap(c, &s)
            }
        };
        Ok(out)
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    stage: Stage,
    settings: serde_json::Value,
) -> Result<T, VerifyError> {
    serde_json::from_value(settings).map_err(|source| VerifyError::BadSettings {
        stage: stage.number(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_number(stage.number()), Some(stage));
            let name = format!("{}_something", stage.prefix());
            assert_eq!(Stage::from_scenario_name(&name), Some(stage));
        }
    }

    #[test]
    fn test_out_of_scope_stages() {
        for n in [0, 1, 2, 3, 7, 10] {
            assert_eq!(Stage::from_number(n), None);
        }
        assert_eq!(Stage::from_scenario_name("stage7_motionBlur"), None);
        assert_eq!(Stage::from_scenario_name("bogus"), None);
        assert_eq!(Stage::from_scenario_name(""), None);
    }

    #[test]
    fn test_evaluate_uses_defaults_for_omitted_fields() {
        // An empty settings object means documented defaults, which for
        // stage 9 is the identity remap.
        let c = Rgb::new(0.18, 0.18, 0.18);
        let out = Stage::DisplayRemap
            .evaluate(c, &serde_json::json!({}))
            .unwrap();
        assert_eq!(out, c);
    }

    #[test]
    fn test_evaluate_rejects_mistyped_settings() {
        let err = Stage::Tonemap
            .evaluate(Rgb::WHITE, &serde_json::json!({"tonemapOp": "aces"}))
            .unwrap_err();
        assert!(matches!(err, VerifyError::BadSettings { stage: 6, .. }));
    }

    #[test]
    fn test_evaluate_dispatches_to_stage_math() {
        let settings = serde_json::json!({"blackLevel": 0.05, "whiteLevel": 0.95});
        let out = Stage::DisplayRemap
            .evaluate(Rgb::splat(0.18), &settings)
            .unwrap();
        assert!(out.max_abs_diff(Rgb::splat(0.212)) <= 1e-4);
    }
}
