//! # file-check
//!
//! Content-presence assertions for files produced by other pipelines.
//!
//! A configuration maps file paths to the values expected somewhere in each
//! file. Every file is checked with a strategy picked from its extension
//! (`.csv` rows, `.json` documents, anything else as plain lines) and the
//! verdict is appended to a result log.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use file_check::{LogSettings, ResultLogger, check_targets, load_configuration};
//!
//! let config = load_configuration(Path::new("paths.yaml")).unwrap();
//! let mut logger = ResultLogger::open(&LogSettings::default()).unwrap();
//!
//! let report = check_targets(&config, &mut logger).unwrap();
//! println!("Passed: {}", report.passed_count());
//! println!("Failed: {}", report.failed_count());
//! println!("Skipped: {}", report.skipped_count());
//! ```

mod config;
mod error;
pub mod format;
mod logger;
mod repr;
mod report;
mod strategy;

pub use config::{
    ConfigFormat, Configuration, DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH, LOG_TIMESTAMP_FORMAT,
    LogSettings, Target, load_configuration, parse_configuration,
};
pub use error::ConfigError;
pub use logger::ResultLogger;
pub use repr::{list_repr, str_repr};
pub use report::{CheckOutcome, PathReport, PathStatus, RunReport};
pub use strategy::{ContentFormat, content_format_for};

use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use format::record::{check_record, decode_record};
use format::tabular::{check_tabular, tabular_reader};
use format::text::check_text;
use strategy::fs::{open_target, read_all};

/// Check every configured target in order, logging one verdict per target.
///
/// A target that cannot be opened, does not decode, or fails mid-read is
/// logged and skipped; the remaining targets are still checked.
///
/// # Errors
///
/// Returns an error only if the result log or console cannot be written.
pub fn check_targets<L: Write, C: Write>(
    config: &Configuration,
    logger: &mut ResultLogger<L, C>,
) -> anyhow::Result<RunReport> {
    info!(targets = config.len(), "checking configured targets");

    let mut report = RunReport::default();
    for target in config {
        let format = content_format_for(&target.path);
        debug!(path = %target.path, ?format, values = target.values.len(), "checking target");

        let status = check_target(target, format, logger)
            .with_context(|| format!("failed to record result for {}", target.path))?;
        report.paths.push(PathReport {
            path: target.path.clone(),
            format,
            status,
        });
    }
    Ok(report)
}

/// Load the configuration at `config_path` and check it against the result
/// log described by `settings`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the log cannot be
/// opened, or a log line cannot be written.
pub fn run(config_path: &Path, settings: &LogSettings) -> anyhow::Result<RunReport> {
    let config = load_configuration(config_path)?;
    let mut logger = ResultLogger::open(settings).with_context(|| {
        format!(
            "failed to open result log {}",
            settings.destination.display()
        )
    })?;
    check_targets(&config, &mut logger)
}

/// Open, check and log a single target.
///
/// The outer `io::Result` only carries failures to write the log; problems
/// with the target itself become a `PathStatus`. The file handle is dropped
/// before returning on every path.
fn check_target<L: Write, C: Write>(
    target: &Target,
    format: ContentFormat,
    logger: &mut ResultLogger<L, C>,
) -> io::Result<PathStatus> {
    let mut file = match open_target(Path::new(&target.path)) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %target.path, error = %e, "target could not be opened");
            logger.record_not_found(&target.path)?;
            return Ok(PathStatus::NotFound);
        }
    };

    let counted = match format {
        ContentFormat::Tabular => check_tabular(&target.values, &mut tabular_reader(file)),
        ContentFormat::PlainText => check_text(&target.values, &mut BufReader::new(file)),
        ContentFormat::StructuredRecord => match read_all(&mut file) {
            Ok(content) => match decode_record(&content) {
                Ok(document) => Ok(check_record(&target.values, &document)),
                Err(e) => {
                    debug!(path = %target.path, error = %e, "target is not valid json");
                    logger.record_undecodable(&target.path)?;
                    return Ok(PathStatus::Undecodable);
                }
            },
            Err(e) => Err(e),
        },
    };

    match counted {
        Ok(found) => {
            let outcome = CheckOutcome::new(found, target.values.len());
            logger.record_outcome(format, &target.values, &target.path, outcome)?;
            Ok(PathStatus::Checked(outcome))
        }
        Err(e) => {
            logger.record_unreadable(&target.path, &e)?;
            Ok(PathStatus::Unreadable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn memory_logger() -> ResultLogger<Vec<u8>, Vec<u8>> {
        ResultLogger::new(Vec::new(), Vec::new(), &LogSettings::default())
    }

    fn target(path: &Path, values: &[&str]) -> Target {
        Target::new(
            path.to_string_lossy(),
            values.iter().map(|s| (*s).to_owned()).collect(),
        )
    }

    #[test]
    fn test_check_target_statuses() {
        let tmp = TempDir::new().unwrap();
        let text = tmp.path().join("notes.txt");
        fs::write(&text, "hello\n").unwrap();
        let bad = tmp.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();

        let mut logger = memory_logger();
        let status = check_target(
            &target(&text, &["hello", "bye"]),
            ContentFormat::PlainText,
            &mut logger,
        )
        .unwrap();
        assert_eq!(status, PathStatus::Checked(CheckOutcome::new(1, 2)));

        let status = check_target(
            &target(&bad, &["x"]),
            ContentFormat::StructuredRecord,
            &mut logger,
        )
        .unwrap();
        assert_eq!(status, PathStatus::Undecodable);

        let status = check_target(
            &target(&tmp.path().join("missing.csv"), &["x"]),
            ContentFormat::Tabular,
            &mut logger,
        )
        .unwrap();
        assert_eq!(status, PathStatus::NotFound);
    }

    // Opening `/proc/self/mem` succeeds but reading offset 0 fails with EIO.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_failure_after_open_is_unreadable() {
        let mut logger = memory_logger();
        let mem = Path::new("/proc/self/mem");
        let status =
            check_target(&target(mem, &["x"]), ContentFormat::PlainText, &mut logger).unwrap();
        assert_eq!(status, PathStatus::Unreadable);

        let status = check_target(
            &target(mem, &["x"]),
            ContentFormat::StructuredRecord,
            &mut logger,
        )
        .unwrap();
        assert_eq!(status, PathStatus::Unreadable);

        let log = String::from_utf8(logger.log_sink().clone()).unwrap();
        assert_eq!(
            log.matches("ERROR    file /proc/self/mem could not be read: ").count(),
            2,
            "got: {log}"
        );
        assert!(!log.contains("SUCCESS") && !log.contains("FAIL"), "got: {log}");
    }

    #[test]
    fn test_empty_value_list_passes() {
        let tmp = TempDir::new().unwrap();
        let text = tmp.path().join("empty.txt");
        fs::write(&text, "").unwrap();

        let mut logger = memory_logger();
        let status = check_target(&target(&text, &[]), ContentFormat::PlainText, &mut logger)
            .unwrap();
        assert_eq!(status, PathStatus::Checked(CheckOutcome::new(0, 0)));
        let log = String::from_utf8(logger.log_sink().clone()).unwrap();
        assert!(log.contains("SUCCESS - search strings [] found within"));
    }

    #[test]
    fn test_check_targets_follows_configuration_order() {
        let tmp = TempDir::new().unwrap();
        let b = tmp.path().join("b.txt");
        let a = tmp.path().join("a.txt");
        fs::write(&b, "bee\n").unwrap();
        fs::write(&a, "ay\n").unwrap();

        let config =
            Configuration::from_targets(vec![target(&b, &["bee"]), target(&a, &["ay"])]).unwrap();
        let mut logger = memory_logger();
        let report = check_targets(&config, &mut logger).unwrap();

        let order: Vec<&str> = report.paths.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(order, vec![b.to_str().unwrap(), a.to_str().unwrap()]);
        let log = String::from_utf8(logger.log_sink().clone()).unwrap();
        let first = log.find("b.txt").unwrap();
        let second = log.find("a.txt").unwrap();
        assert!(first < second);
    }
}
