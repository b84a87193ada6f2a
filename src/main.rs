//! aver - GitHub Actions version checker CLI tool
//!
//! Scans `.github/workflows` for `uses:` references and reports:
//! - Tag-pinned actions with a newer qualifying release tag
//! - SHA-pinned actions trailing their default branch

use aver::cli::CliArgs;
use aver::config::Settings;
use aver::orchestrator::Orchestrator;
use aver::output::{create_formatter, OutputConfig};
use aver::progress::Progress;
use aver::workflow::discover_references;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code when at least one finding exists
const EXIT_STALE: u8 = 1;

/// Exit code for fatal errors
const EXIT_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(&args)?;
    debug!(path = %settings.path.display(), api = %settings.api_url, "starting check");

    let mut progress = Progress::new(settings.show_progress);
    progress.spinner("Discovering workflows...");
    let references = discover_references(&settings.path)?;
    progress.finish_and_clear();
    debug!(count = references.len(), "references to check");

    let orchestrator = Orchestrator::new(&settings)?;
    let report = orchestrator.run(&references).await?;

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    let output_config =
        OutputConfig::from_cli(settings.json, settings.quiet, io::stdout().is_terminal());
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if report.is_up_to_date() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_STALE))
    }
}
