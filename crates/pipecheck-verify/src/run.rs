//! Verification driver: walks the fixture's scenarios, recomputes and
//! compares, and aggregates a run report.

use crate::compare::{PointResult, compare_results};
use crate::stage::Stage;
use pipecheck_fixture::Fixture;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that abort a verification run.
///
/// Out-of-tolerance comparisons and missing points are results, not
/// errors; only a structurally unusable fixture lands here.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A scenario's settings object does not match its stage's option set.
    #[error("stage {stage} settings do not match the stage's option set: {source}")]
    BadSettings {
        /// Pipeline stage number
        stage: u32,
        /// Underlying deserialization error
        source: serde_json::Error,
    },
}

/// Comparison outcome for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// Scenario name (`stage<N>_<label>`).
    pub name: String,
    /// Scenario description from the fixture.
    pub description: String,
    /// Tolerance the points were compared under.
    pub tolerance: f32,
    /// Per-point outcomes, in stable name order.
    pub points: Vec<PointResult>,
}

impl ScenarioReport {
    /// Number of passing points.
    pub fn passed(&self) -> usize {
        self.points.iter().filter(|p| p.passed).count()
    }

    /// Number of failing points (including missing ones).
    pub fn failed(&self) -> usize {
        self.points.len() - self.passed()
    }
}

/// Aggregate outcome of a verification run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Per-scenario outcomes, in fixture iteration order.
    pub scenarios: Vec<ScenarioReport>,
    /// Scenario names skipped because no verifier is registered for
    /// their prefix. Skips affect neither pass nor fail counts.
    pub skipped: Vec<String>,
}

impl Report {
    /// Total passing comparisons across all processed scenarios.
    pub fn total_passed(&self) -> usize {
        self.scenarios.iter().map(|s| s.passed()).sum()
    }

    /// Total failing comparisons across all processed scenarios.
    pub fn total_failed(&self) -> usize {
        self.scenarios.iter().map(|s| s.failed()).sum()
    }

    /// True when every executed comparison passed.
    ///
    /// A run that executed zero comparisons (e.g. a stage filter that
    /// matches nothing) counts as passed.
    pub fn all_passed(&self) -> bool {
        self.total_failed() == 0
    }
}

/// Runs verification over a loaded fixture.
///
/// `stage_filter` restricts the run to scenarios of one pipeline stage
/// number; a number with no matching scenarios (including the
/// deliberately absent stages 0/1/2/3/7) yields zero comparisons rather
/// than an error.
pub fn run_verification(
    fixture: &Fixture,
    stage_filter: Option<u32>,
) -> Result<Report, VerifyError> {
    // The fixture, not the built-in table, supplies verification inputs.
    let test_points = fixture.test_point_rgb();
    let mut report = Report::default();

    for (name, scenario) in &fixture.stage_expected {
        let Some(stage) = Stage::from_scenario_name(name) else {
            warn!(scenario = %name, "no verifier registered for scenario, skipping");
            report.skipped.push(name.clone());
            continue;
        };

        if let Some(filter) = stage_filter {
            if stage.number() != filter {
                continue;
            }
        }

        let mut computed = BTreeMap::new();
        for (point_name, &c) in &test_points {
            let out = stage.evaluate(c, &scenario.settings)?;
            computed.insert(point_name.clone(), out);
        }

        let points = compare_results(&computed, &scenario.results, scenario.tolerance);
        debug!(
            scenario = %name,
            tolerance = scenario.tolerance,
            failed = points.iter().filter(|p| !p.passed).count(),
            "scenario compared"
        );
        report.scenarios.push(ScenarioReport {
            name: name.clone(),
            description: scenario.description.clone(),
            tolerance: scenario.tolerance,
            points,
        });
    }

    Ok(report)
}
