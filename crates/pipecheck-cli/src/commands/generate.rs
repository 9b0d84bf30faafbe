//! Generate command: freeze golden reference values to disk.

use crate::GenerateArgs;
use anyhow::{Context, Result};
use pipecheck_fixture::reference_fixture;
use tracing::debug;

pub fn run(args: GenerateArgs) -> Result<()> {
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let fixture = reference_fixture();
    debug!(
        scenarios = fixture.stage_expected.len(),
        points = fixture.test_points.len(),
        "reference fixture computed"
    );
    fixture
        .save(&args.output)
        .context("Failed to write fixture")?;

    println!(
        "Wrote {} scenarios x {} test points to {}",
        fixture.stage_expected.len(),
        fixture.test_points.len(),
        args.output.display()
    );
    Ok(())
}
