//! Tolerance-based comparison of recomputed results against golden values.

use pipecheck_fixture::ExpectedRgb;
use pipecheck_math::Rgb;
use std::collections::BTreeMap;

/// Outcome of comparing one test point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointResult {
    /// Test-point name.
    pub name: String,
    /// Recomputed value; `None` means the point was missing from the
    /// computed results (counted as a failure).
    pub computed: Option<Rgb>,
    /// Golden expected value.
    pub expected: Rgb,
    /// Maximum per-channel absolute delta (0 when the point was missing).
    pub max_delta: f32,
    /// Whether the point passed (`max_delta <= tolerance`, inclusive).
    pub passed: bool,
}

impl PointResult {
    /// True when the point failed because it was absent from the
    /// computed results.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.computed.is_none()
    }
}

/// Compares computed values against a scenario's expected results.
///
/// Iterates the expected table (the golden side drives coverage): a
/// point absent from `computed` fails as MISSING. The tolerance boundary
/// is inclusive — a delta exactly equal to the tolerance passes.
pub fn compare_results(
    computed: &BTreeMap<String, Rgb>,
    expected: &BTreeMap<String, ExpectedRgb>,
    tolerance: f32,
) -> Vec<PointResult> {
    expected
        .iter()
        .map(|(name, exp)| {
            let exp = exp.rgb();
            match computed.get(name) {
                None => PointResult {
                    name: name.clone(),
                    computed: None,
                    expected: exp,
                    max_delta: 0.0,
                    passed: false,
                },
                Some(&comp) => {
                    let max_delta = comp.max_abs_diff(exp);
                    PointResult {
                        name: name.clone(),
                        computed: Some(comp),
                        expected: exp,
                        max_delta,
                        passed: max_delta <= tolerance,
                    }
                }
            }
        })
        .collect()
}
