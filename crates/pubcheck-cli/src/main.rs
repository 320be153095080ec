//! # pubcheck CLI entry point
//!
//! Parses command-line arguments, initializes tracing, runs the validation
//! walk, and renders the report. All validation logic lives in
//! `pubcheck-core`; this binary only maps a [`Report`] onto stdout lines and
//! an exit status.
//!
//! [`Report`]: pubcheck_core::Report

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pubcheck_core::validate_tree;

/// Validate the JSON shapes of a publication repository tree.
///
/// Checks `publications/*/manifest.json`, `publications/*/segments/*/dialogues.json`,
/// and `publications/recent.json` for required fields and identifier
/// consistency, and reports every violation found.
#[derive(Parser, Debug)]
#[command(name = "pubcheck", version, about)]
struct Cli {
    /// Root directory to validate.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(passed) => {
            if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Run the walk and render the report. Returns the "passed" flag.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    println!("🔍 Repo-shaped validator starting...");

    let report = validate_tree(&cli.root)
        .with_context(|| format!("failed to validate tree at {}", cli.root.display()))?;

    if report.passed() {
        println!("✅ All validations passed.");
    } else {
        println!();
        println!("Found {} issues:", report.len());
        for diagnostic in report.diagnostics() {
            println!("{diagnostic}");
        }
    }

    Ok(report.passed())
}
