//! Result log: the persistent, append-only record of every verdict.
//!
//! A `ResultLogger` is built once per run and handed to the dispatcher by
//! reference. Each line has the shape
//!
//! ```text
//! 2026-10-16 09:30:00 ERROR    FAIL - search strings ['do', 'not'] were not all found within notes.txt
//! ```
//!
//! Successful checks additionally print a short notice on the console.
//! Every line written is mirrored as a `tracing` event.

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};

use chrono::Local;
use tracing::Level;

use crate::config::LogSettings;
use crate::repr::list_repr;
use crate::report::CheckOutcome;
use crate::strategy::ContentFormat;

/// Writes verdict lines to a log sink and success notices to a console sink.
pub struct ResultLogger<L: Write, C: Write> {
    log: L,
    console: C,
    level: Level,
    timestamp_format: &'static str,
}

impl ResultLogger<File, Stdout> {
    /// Open the destination file in append mode, with stdout as the console.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the log file cannot be created or opened.
    pub fn open(settings: &LogSettings) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.destination)?;
        Ok(Self::new(file, io::stdout(), settings))
    }
}

impl<L: Write, C: Write> ResultLogger<L, C> {
    #[must_use]
    pub fn new(log: L, console: C, settings: &LogSettings) -> Self {
        Self {
            log,
            console,
            level: settings.level,
            timestamp_format: settings.timestamp_format,
        }
    }

    /// Append one timestamped line at `level`.
    ///
    /// Lines less severe than the configured level are dropped.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the log sink cannot be written.
    pub fn log(&mut self, level: Level, message: &str) -> io::Result<()> {
        if level > self.level {
            return Ok(());
        }
        let timestamp = Local::now().format(self.timestamp_format);
        writeln!(self.log, "{timestamp} {:<8} {message}", level.as_str())?;
        self.log.flush()?;
        mirror(level, message);
        Ok(())
    }

    /// Print a notice on the console sink.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the console cannot be written.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.console, "{text}")
    }

    /// Log the verdict for a checked target.
    ///
    /// A pass is logged at `DEBUG` and announced on the console; a failure is
    /// logged at `ERROR` only. Both name the full list of expected values.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if a sink cannot be written.
    pub fn record_outcome(
        &mut self,
        format: ContentFormat,
        values: &[String],
        path: &str,
        outcome: CheckOutcome,
    ) -> io::Result<()> {
        let listed = list_repr(values);
        if outcome.passed() {
            self.log(
                Level::DEBUG,
                &format!("SUCCESS - search strings {listed} found within {path}"),
            )?;
            self.notice(format.success_notice())
        } else {
            self.log(
                Level::ERROR,
                &format!("FAIL - search strings {listed} were not all found within {path}"),
            )
        }
    }

    /// Log a target that could not be opened.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the log sink cannot be written.
    pub fn record_not_found(&mut self, path: &str) -> io::Result<()> {
        self.log(Level::ERROR, &format!("File {path} was not found"))
    }

    /// Log a JSON target whose content could not be decoded.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the log sink cannot be written.
    pub fn record_undecodable(&mut self, path: &str) -> io::Result<()> {
        self.log(
            Level::ERROR,
            &format!("file {path} was unable to be decoded as json"),
        )
    }

    /// Log a target whose content could not be read after opening.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the log sink cannot be written.
    pub fn record_unreadable(&mut self, path: &str, err: &io::Error) -> io::Result<()> {
        self.log(
            Level::ERROR,
            &format!("file {path} could not be read: {err}"),
        )
    }

    #[must_use]
    pub fn log_sink(&self) -> &L {
        &self.log
    }

    #[must_use]
    pub fn console_sink(&self) -> &C {
        &self.console
    }

    #[must_use]
    pub fn into_sinks(self) -> (L, C) {
        (self.log, self.console)
    }
}

fn mirror(level: Level, message: &str) {
    match level {
        Level::ERROR => tracing::error!("{message}"),
        Level::WARN => tracing::warn!("{message}"),
        Level::INFO => tracing::info!("{message}"),
        Level::DEBUG => tracing::debug!("{message}"),
        _ => tracing::trace!("{message}"),
    }
}
