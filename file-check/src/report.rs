//! Run report types.

use crate::strategy::ContentFormat;

/// How many expected values were located in one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckOutcome {
    /// Number of expected values with at least one match.
    pub found: usize,
    /// Number of expected values configured, duplicates included.
    pub expected: usize,
}

impl CheckOutcome {
    #[must_use]
    pub fn new(found: usize, expected: usize) -> Self {
        Self { found, expected }
    }

    /// A target passes only when every expected value was found.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.found == self.expected
    }
}

/// What happened to one configured target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathStatus {
    /// The file was checked; see the outcome for the verdict.
    Checked(CheckOutcome),
    /// The file could not be opened.
    NotFound,
    /// A JSON target whose content is not valid JSON.
    Undecodable,
    /// The file was opened but reading it failed part way.
    Unreadable,
}

/// Per-target entry of a run report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PathReport {
    /// Target path as written in the configuration.
    pub path: String,
    pub format: ContentFormat,
    pub status: PathStatus,
}

/// Result of a check run, one entry per configured target in order.
///
/// The verdicts are already in the result log by the time this is returned;
/// the report only lets callers inspect them without re-reading the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunReport {
    pub paths: Vec<PathReport>,
}

impl RunReport {
    /// Number of targets where every expected value was found.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.paths
            .iter()
            .filter(|p| matches!(p.status, PathStatus::Checked(o) if o.passed()))
            .count()
    }

    /// Number of targets checked with at least one value missing.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.paths
            .iter()
            .filter(|p| matches!(p.status, PathStatus::Checked(o) if !o.passed()))
            .count()
    }

    /// Number of targets that could not be checked at all.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.paths
            .iter()
            .filter(|p| !matches!(p.status, PathStatus::Checked(_)))
            .count()
    }

    /// Whether every target was checked and passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed_count() == self.paths.len()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PathReport> {
        self.paths.iter().find(|p| p.path == path)
    }
}
