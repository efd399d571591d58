use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use file_check::{DEFAULT_CONFIG_PATH, LogSettings};

#[derive(Parser)]
#[command(name = "file-check")]
#[command(version, about = "Check that expected values are present in CSV, JSON and text files")]
pub struct Cli {
    /// Configuration mapping each file path to its expected values (YAML or JSON)
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Run the checks described by the configuration named on the command line.
///
/// Verdicts go to the result log; only configuration and log failures are
/// reported as errors.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the result log
/// cannot be written.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = LogSettings::default();

    let report = file_check::run(&cli.config, &settings)?;
    info!(
        passed = report.passed_count(),
        failed = report.failed_count(),
        skipped = report.skipped_count(),
        log = %settings.destination.display(),
        "check run finished"
    );
    Ok(())
}
