//! pipecheck - per-stage math verification for the color rendering pipeline
//!
//! Re-derives every verifiable stage's output from closed-form math and
//! checks the pipeline's golden reference values against it.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

const DEFAULT_FIXTURE: &str = "test/fixtures/reference-values.json";

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(author, version, about = "Color pipeline math verification")]
#[command(long_about = "
Verifies the numeric correctness of the color rendering pipeline stage by
stage: input color space conversion, grading, tonemapping, output encoding
and display remapping.

Examples:
  pipecheck generate                    # Freeze golden reference values
  pipecheck generate -o golden.json
  pipecheck verify                      # Verify all stages
  pipecheck verify --stage 6            # Verify one stage
  pipecheck verify --verbose            # Show deltas for passing points too

Exit codes: 0 = all comparisons pass, 1 = failures.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute golden reference values and write the fixture
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Verify pipeline math against the golden fixture
    #[command(visible_alias = "v")]
    Verify(VerifyArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Output fixture path
    #[arg(short, long, default_value = DEFAULT_FIXTURE)]
    output: PathBuf,
}

#[derive(Args)]
struct VerifyArgs {
    /// Fixture path
    #[arg(short, long, default_value = DEFAULT_FIXTURE)]
    fixture: PathBuf,

    /// Verify a specific stage (4, 5, 6, 8, 9)
    #[arg(short, long)]
    stage: Option<u32>,

    /// Show deltas for passing points, not only failures
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Verify(args) => commands::verify::run(args),
    }
}
