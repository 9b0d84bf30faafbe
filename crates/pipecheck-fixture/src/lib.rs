//! # pipecheck-fixture
//!
//! The golden reference fixture shared between the reference generator
//! and the verifier.
//!
//! The fixture is a single JSON document with two sections:
//!
//! - `testPoints`: name -> `{R, G, B, A}` input samples (A is carried but
//!   never transformed),
//! - `stageExpected`: scenario name (`stage<N>_<label>`) -> settings,
//!   description, tolerance and expected per-point results.
//!
//! The generator ([`reference_fixture`]) evaluates the stage model over
//! the fixed test-point table and freezes the results; the verifier later
//! reloads the document and treats it as the single source of truth —
//! including for the test-point inputs themselves.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pipecheck_fixture::{reference_fixture, Fixture};
//!
//! let fixture = reference_fixture();
//! fixture.save("reference-values.json")?;
//!
//! let loaded = Fixture::load("reference-values.json")?;
//! assert_eq!(loaded.stage_expected.len(), 7);
//! # Ok::<(), pipecheck_fixture::FixtureError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod generate;
mod model;
mod points;

pub use error::FixtureError;
pub use generate::reference_fixture;
pub use model::{ExpectedRgb, Fixture, Scenario, TestPoint};
pub use points::{TEST_POINTS, test_point_table};
