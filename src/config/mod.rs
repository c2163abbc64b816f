//! Configuration for the wage reader.

use std::path::PathBuf;

use crate::error::{Result, WageReaderError};

/// Default filename marker identifying a wage survey export
pub const DEFAULT_FILE_MARKER: &str = "monthly basic and gross wages";

/// Default prefix of industry worksheet names
pub const DEFAULT_SHEET_PREFIX: &str = "T4";

/// Survey years recognised by the legacy filename scan, in scan order
pub const LEGACY_YEARS: [i32; 4] = [2021, 2022, 2023, 2024];

/// How the survey year is extracted from a workbook filename
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum YearPolicy {
    /// Check each listed year in list order; the first one present anywhere
    /// in the filename wins
    Known(Vec<i32>),
    /// The first standalone 4-digit token in the filename within 1900..=2099
    #[default]
    AnyToken,
}

impl YearPolicy {
    /// The fixed year list of the 2021-2024 survey exports
    #[must_use]
    pub fn legacy() -> Self {
        Self::Known(LEGACY_YEARS.to_vec())
    }
}

/// Configuration for the wage reader
#[derive(Debug, Clone)]
pub struct WageReaderConfig {
    /// Directory scanned for survey workbooks
    pub data_dir: PathBuf,
    /// Substring a workbook filename must contain
    pub file_marker: String,
    /// Accepted spreadsheet extensions, compared case-insensitively
    pub extensions: Vec<String>,
    /// Prefix a worksheet name must start with to be loaded
    pub sheet_prefix: String,
    /// Year extraction policy
    pub year_policy: YearPolicy,
    /// Process workbooks in parallel
    pub parallel: bool,
}

impl Default for WageReaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            file_marker: DEFAULT_FILE_MARKER.to_string(),
            extensions: vec!["xlsx".to_string()],
            sheet_prefix: DEFAULT_SHEET_PREFIX.to_string(),
            year_policy: YearPolicy::default(),
            parallel: true,
        }
    }
}

impl WageReaderConfig {
    /// Create a default configuration reading from `data_dir`
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Defaults overlaid with `WAGE_DATA_DIR`, `WAGE_FILE_MARKER` and
    /// `WAGE_PARALLEL` from the environment
    ///
    /// # Errors
    /// Returns a configuration error if `WAGE_PARALLEL` is not a boolean flag
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("WAGE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(marker) = std::env::var("WAGE_FILE_MARKER") {
            config.file_marker = marker;
        }
        if let Some(parallel) = get_parallel_override()? {
            config.parallel = parallel;
        }
        Ok(config)
    }
}

/// Helper to read the parallelism override from the environment
pub fn get_parallel_override() -> Result<Option<bool>> {
    std::env::var("WAGE_PARALLEL")
        .ok()
        .map(|s| parse_flag("WAGE_PARALLEL", &s))
        .transpose()
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WageReaderError::Config(format!(
            "{name} must be a boolean flag, got '{other}'"
        ))),
    }
}
