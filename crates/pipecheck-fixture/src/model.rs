//! Serde data model of the fixture document.
//!
//! Field names follow the on-disk contract: channel records use uppercase
//! `R`/`G`/`B`/`A`, section and setting names are camelCase. Maps are
//! `BTreeMap` so iteration (and therefore report) order is stable across
//! runs.

use crate::FixtureError;
use pipecheck_math::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One input test point: a 4-channel sample.
///
/// Alpha is present in the document but never transformed by any stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestPoint {
    /// Red channel
    #[serde(rename = "R")]
    pub r: f32,
    /// Green channel
    #[serde(rename = "G")]
    pub g: f32,
    /// Blue channel
    #[serde(rename = "B")]
    pub b: f32,
    /// Alpha channel (carried, never transformed)
    #[serde(rename = "A")]
    pub a: f32,
}

impl TestPoint {
    /// The transformable RGB part of the sample.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// One expected result: a 3-channel record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedRgb {
    /// Red channel
    #[serde(rename = "R")]
    pub r: f32,
    /// Green channel
    #[serde(rename = "G")]
    pub g: f32,
    /// Blue channel
    #[serde(rename = "B")]
    pub b: f32,
}

impl ExpectedRgb {
    /// Value as an [`Rgb`].
    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for ExpectedRgb {
    #[inline]
    fn from(c: Rgb) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// One stage invocation frozen into the fixture.
///
/// The scenario's stage is encoded in its name (`stage<N>_<label>`); the
/// settings stay a raw JSON object here and are parsed into the stage's
/// typed settings struct at dispatch time, so unknown fields from the
/// externally defined option set survive a round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stage settings as recorded by the generator.
    pub settings: serde_json::Value,
    /// Human-readable description of the transform under test.
    pub description: String,
    /// Maximum allowed per-channel absolute deviation. Always positive;
    /// the comparison boundary is inclusive.
    pub tolerance: f32,
    /// Expected result per test-point name.
    pub results: BTreeMap<String, ExpectedRgb>,
}

/// The whole fixture document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Input samples by name.
    #[serde(rename = "testPoints")]
    pub test_points: BTreeMap<String, TestPoint>,
    /// Frozen scenarios by name.
    #[serde(rename = "stageExpected")]
    pub stage_expected: BTreeMap<String, Scenario>,
}

impl Fixture {
    /// Loads a fixture document from disk.
    ///
    /// Any failure here (absent file, malformed JSON, schema mismatch) is
    /// fatal to a verification run: it is a precondition, not a
    /// per-scenario concern.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the fixture document as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| FixtureError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The test points as plain RGB samples, in stable name order.
    ///
    /// This is what the verifier recomputes stages over — the fixture,
    /// not the built-in table, is the source of truth for inputs.
    pub fn test_point_rgb(&self) -> BTreeMap<String, Rgb> {
        self.test_points
            .iter()
            .map(|(name, p)| (name.clone(), p.rgb()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_record_wire_names() {
        let p = TestPoint {
            r: 0.18,
            g: 0.18,
            b: 0.18,
            a: 1.0,
        };
        let json = serde_json::to_value(p).unwrap();
        // f32 widens to f64 in the Value, so compare after narrowing back.
        assert_eq!(json["R"].as_f64().unwrap() as f32, 0.18);
        assert_eq!(json["A"].as_f64().unwrap() as f32, 1.0);
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = serde_json::json!({
            "testPoints": {
                "midgray": {"R": 0.18, "G": 0.18, "B": 0.18, "A": 1.0}
            },
            "stageExpected": {
                "stage9_displayRemap": {
                    "settings": {"blackLevel": 0.05, "whiteLevel": 0.95},
                    "description": "Linear remap",
                    "tolerance": 0.0001,
                    "results": {
                        "midgray": {"R": 0.212, "G": 0.212, "B": 0.212}
                    }
                }
            }
        });
        let fixture: Fixture = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(fixture.test_points["midgray"].rgb().r, 0.18);
        let scenario = &fixture.stage_expected["stage9_displayRemap"];
        assert_eq!(scenario.tolerance, 0.0001);
        assert_eq!(scenario.results["midgray"].rgb().g, 0.212);

        let back = serde_json::to_value(&fixture).unwrap();
        let again: Fixture = serde_json::from_value(back).unwrap();
        assert_eq!(again, fixture);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference-values.json");

        let fixture = crate::reference_fixture();
        fixture.save(&path).unwrap();
        let loaded = Fixture::load(&path).unwrap();
        assert_eq!(loaded, fixture);
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Fixture::load(&path).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = Fixture::load("/nonexistent/reference-values.json").unwrap_err();
        assert!(matches!(err, FixtureError::Read { .. }));
    }
}
