//! Check strategies: choosing a checker per target and opening its file.

pub mod fs;

/// Content format for dispatching to the correct checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Delimited rows (`.csv`).
    Tabular,
    /// A JSON document (`.json`).
    StructuredRecord,
    /// Anything else, scanned line by line.
    PlainText,
}

impl ContentFormat {
    /// Console notice printed when every expected value was found.
    #[must_use]
    pub fn success_notice(self) -> &'static str {
        match self {
            Self::Tabular => "CSV Values found in dataset",
            Self::StructuredRecord => "JSON Values found in dataset",
            Self::PlainText => "Values found in txt dataset",
        }
    }
}

/// Determine the content format from a target path.
///
/// Matching is a case-insensitive suffix check on the path as written, so
/// `DATA.CSV` is tabular and a bare `.json` is still a structured record.
#[must_use]
pub fn content_format_for(path: &str) -> ContentFormat {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".csv") {
        ContentFormat::Tabular
    } else if lower.ends_with(".json") {
        ContentFormat::StructuredRecord
    } else {
        ContentFormat::PlainText
    }
}
