//! Verify command: run the comparator and format the console report.
//!
//! Report shape, one block per scenario:
//!
//! ```text
//! [PASS] stage6_rrt_acesFit: ACES Fit tonemap (Stephen Hill), BT.709 path
//!        4 passed, 0 failed (tolerance=0.01)
//! ```
//!
//! with per-point FAIL/MISSING lines always shown and per-point PASS
//! lines shown under `--verbose`.

use crate::VerifyArgs;
use anyhow::{Context, Result, bail};
use pipecheck_fixture::Fixture;
use pipecheck_verify::{PointResult, Report, run_verification};

pub fn run(args: VerifyArgs) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("Pipeline Checker - Math Verification");
    println!("{}", "=".repeat(60));
    println!();

    // Fixture problems are fatal before any comparison runs.
    let fixture = Fixture::load(&args.fixture)
        .with_context(|| format!("Cannot load fixture {}", args.fixture.display()))?;

    let report = run_verification(&fixture, args.stage).context("Verification aborted")?;
    print_report(&report, args.verbose);

    if !report.all_passed() {
        bail!(
            "FAIL: {} of {} comparisons failed",
            report.total_failed(),
            report.total_passed() + report.total_failed()
        );
    }
    println!("RESULT: PASS");
    Ok(())
}

fn print_report(report: &Report, verbose: bool) {
    for scenario in &report.scenarios {
        let status = if scenario.failed() == 0 { "PASS" } else { "FAIL" };
        println!("[{}] {}: {}", status, scenario.name, scenario.description);
        println!(
            "       {} passed, {} failed (tolerance={})",
            scenario.passed(),
            scenario.failed(),
            scenario.tolerance
        );
        for point in &scenario.points {
            print_point(point, scenario.tolerance, verbose);
        }
    }

    println!();
    println!("{}", "-".repeat(60));
    println!(
        "TOTAL: {} passed, {} failed",
        report.total_passed(),
        report.total_failed()
    );
}

fn print_point(point: &PointResult, tolerance: f32, verbose: bool) {
    let Some(computed) = point.computed else {
        println!("  MISSING: {}", point.name);
        return;
    };
    if point.passed {
        if verbose {
            println!(
                "  PASS: {:12}  computed=({:.6}, {:.6}, {:.6})  max_delta={:.2e}",
                point.name, computed.r, computed.g, computed.b, point.max_delta
            );
        }
    } else {
        println!(
            "  FAIL: {:12}  computed=({:.6}, {:.6}, {:.6})  expected=({:.6}, {:.6}, {:.6})  max_delta={:.2e} > tolerance={}",
            point.name,
            computed.r,
            computed.g,
            computed.b,
            point.expected.r,
            point.expected.g,
            point.expected.b,
            point.max_delta,
            tolerance
        );
    }
}
