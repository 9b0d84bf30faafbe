//! # pipecheck-verify
//!
//! Re-executes the stage model over the fixture's test points and compares
//! the results against the frozen golden values.
//!
//! # Flow
//!
//! 1. Load the fixture (fatal on failure — see
//!    [`pipecheck_fixture::FixtureError`]).
//! 2. For every scenario, parse the stage from the scenario-name prefix
//!    ([`Stage`]); unknown prefixes are skipped with a warning and affect
//!    no counts.
//! 3. Recompute every test point through the stage function and compare
//!    with max-abs-channel delta against the scenario tolerance
//!    (inclusive boundary). A missing computed point is a failure, not a
//!    crash.
//! 4. Aggregate into a [`Report`]; the caller decides the exit code from
//!    [`Report::all_passed`].
//!
//! # Usage
//!
//! ```rust
//! use pipecheck_fixture::reference_fixture;
//! use pipecheck_verify::run_verification;
//!
//! let fixture = reference_fixture();
//! let report = run_verification(&fixture, None)?;
//! assert!(report.all_passed());
//! # Ok::<(), pipecheck_verify::VerifyError>(())
//! ```

#![warn(missing_docs)]

mod compare;
mod run;
mod stage;

pub use compare::{PointResult, compare_results};
pub use run::{Report, ScenarioReport, VerifyError, run_verification};
pub use stage::Stage;
