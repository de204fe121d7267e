//! CLI for the release issue report.
//!
//! Lists open GitLab issues for a release label and writes them to a CSV
//! file in the current directory.

use clap::Parser;
use release_issues::{FilterCriteria, RunSummary, Runner, RunnerConfig, RunnerError};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Long flags that may also be spelled with a single dash (`-release`).
const LONG_FLAGS: [&str; 3] = ["release", "ready-for-test", "blocker"];

/// Release Issues - Export open issues for a release to CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Specify the release label.
    #[arg(long, default_value = "")]
    release: String,

    /// Only report READY-FOR-TEST issues (requires --release).
    #[arg(long)]
    ready_for_test: bool,

    /// Specify the blocker label (staging-upgrade or production-upgrade).
    #[arg(long, default_value = "")]
    blocker: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse_from(normalize_flags(std::env::args()));

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Report run failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log level comes from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Rewrites `-release`, `-release=x` and friends to their `--` form.
fn normalize_flags(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i > 0 && is_single_dash_long_flag(&arg) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(flag) = arg.strip_prefix('-') else {
        return false;
    };
    if flag.starts_with('-') {
        return false;
    }
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let criteria = FilterCriteria::new(args.release, args.ready_for_test, args.blocker)?;
    info!("Starting report run");

    let runner = Runner::new(RunnerConfig::new(criteria))?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Project: {}", summary.project_path);
    println!("  Issues written: {}", summary.issues_written);
    println!("  Report: {}", summary.report_path.display());
    if let Some(next_page) = summary.next_page {
        println!("  Note: results truncated, page {next_page} and later were not fetched");
    }
    println!("CSV file created successfully.");
}
