//! Configuration types for a file-check run.
//!
//! Split into the target configuration (which files to check and what to look
//! for) and the result log settings (where and how verdicts are written).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use tracing::Level;

use crate::error::ConfigError;

/// Default configuration resource used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "paths.yaml";

/// Default result log destination, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "file_check.log";

/// Timestamp format of every result log line.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One configured file and the values expected somewhere in its content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Target {
    /// Path as written in the configuration. Doubles as the format hint
    /// (via its extension) and as the name used in log lines.
    pub path: String,
    /// Expected values, in configuration order. Duplicates are kept.
    pub values: Vec<String>,
}

impl Target {
    #[must_use]
    pub fn new(path: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            path: path.into(),
            values,
        }
    }
}

/// Ordered mapping of target path to expected values.
///
/// Paths are unique; iteration follows document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Configuration {
    pub targets: Vec<Target>,
}

impl Configuration {
    /// Build a configuration from already-parsed targets.
    ///
    /// # Errors
    ///
    /// Returns the duplicated path if two targets share one.
    pub fn from_targets(targets: Vec<Target>) -> Result<Self, String> {
        let mut config = Self::default();
        for target in targets {
            config.push(target)?;
        }
        Ok(config)
    }

    fn push(&mut self, target: Target) -> Result<(), String> {
        if self.targets.iter().any(|t| t.path == target.path) {
            return Err(target.path);
        }
        self.targets.push(target);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct ConfigurationVisitor;

impl<'de> Visitor<'de> for ConfigurationVisitor {
    type Value = Configuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of file path to a list of expected values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = Configuration::default();
        while let Some((path, values)) = map.next_entry::<String, Option<Vec<String>>>()? {
            let Some(values) = values else {
                return Err(de::Error::custom(format!(
                    "path `{path}` has no list of expected values"
                )));
            };
            config
                .push(Target { path, values })
                .map_err(|dup| de::Error::custom(format!("duplicate path `{dup}`")))?;
        }
        Ok(config)
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConfigurationVisitor)
    }
}

/// Syntax of the configuration resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` resources are decoded as JSON; everything else as YAML.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read and decode the configuration resource at `path`.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read and
/// `ConfigError::Parse` if it is not a mapping of path to a list of strings.
pub fn load_configuration(path: &Path) -> Result<Configuration, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_configuration(&content, ConfigFormat::for_path(path), path)
}

/// Decode configuration `content`; `path` is only used in error messages.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the content is not a mapping of path to a
/// list of strings, or if a path appears twice.
pub fn parse_configuration(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<Configuration, ConfigError> {
    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_owned(),
        message,
    };
    if is_blank_document(content) {
        return Err(parse_error("configuration is empty".to_owned()));
    }
    // A null document decodes as `None`; only a mapping yields a configuration.
    let parsed = match format {
        ConfigFormat::Yaml => {
            serde_saphyr::from_str::<Option<Configuration>>(content).map_err(|e| e.to_string())
        }
        ConfigFormat::Json => {
            serde_json::from_str::<Option<Configuration>>(content).map_err(|e| e.to_string())
        }
    };
    parsed
        .map_err(parse_error)?
        .ok_or_else(|| parse_error("configuration is null".to_owned()))
}

/// True if `content` holds no YAML node: only whitespace, comments and
/// document markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Fixed settings of the result log sink.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LogSettings {
    /// File the verdict lines are appended to.
    pub destination: PathBuf,
    /// Least severe level still written (default: `DEBUG`).
    pub level: Level,
    /// `chrono` format string for the line timestamp.
    pub timestamp_format: &'static str,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_LOG_PATH),
            level: Level::DEBUG,
            timestamp_format: LOG_TIMESTAMP_FORMAT,
        }
    }
}
