//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal failure while loading the configuration resource.
///
/// Unlike per-file problems (missing targets, undecodable JSON), these abort
/// the whole run: there is nothing to check without a configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration resource could not be read.
    #[error("failed to read configuration {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not a mapping of path to a list of strings.
    #[error("invalid configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
