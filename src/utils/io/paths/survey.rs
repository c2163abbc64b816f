//! Survey workbook discovery
//!
//! Finds the wage survey exports in a directory and derives the survey year
//! of each one from its filename, e.g.
//! `Occupational Wages 2022 - monthly basic and gross wages.xlsx`.

use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::config::{WageReaderConfig, YearPolicy};
use crate::error::Result;
use crate::error::util::validate_directory;
use crate::utils::logging::{log_operation_start, log_warning, log_workbooks_found};

/// A discovered survey workbook and its survey year
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SurveyWorkbook {
    /// Survey year taken from the filename
    pub year: i32,
    /// Path of the workbook
    pub path: PathBuf,
}

/// Extract the survey year from a filename according to `policy`
#[must_use]
pub fn extract_year(file_name: &str, policy: &YearPolicy) -> Option<i32> {
    match policy {
        YearPolicy::Known(years) => years
            .iter()
            .copied()
            .find(|year| file_name.contains(&year.to_string())),
        YearPolicy::AnyToken => file_name
            .split(|c: char| !c.is_ascii_digit())
            .filter(|token| token.len() == 4)
            .filter_map(|token| token.parse::<i32>().ok())
            .find(|year| (1900..=2099).contains(year)),
    }
}

/// Whether a filename looks like a survey export
#[must_use]
pub fn is_survey_file_name(file_name: &str, config: &WageReaderConfig) -> bool {
    // Office lock files share the name of the open workbook
    if file_name.starts_with("~$") {
        return false;
    }

    let has_extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            config
                .extensions
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        });

    has_extension
        && file_name
            .to_lowercase()
            .contains(&config.file_marker.to_lowercase())
}

/// Find all survey workbooks in the configured data directory
///
/// Files without the marker or extension are ignored, as are matching files
/// whose name carries no recognisable year. The result is sorted by year and
/// then by path.
///
/// # Errors
/// Returns an error only if the directory itself cannot be read
pub fn find_survey_workbooks(config: &WageReaderConfig) -> Result<Vec<SurveyWorkbook>> {
    let dir = config.data_dir.as_path();
    log_operation_start("Searching for survey workbooks in", dir);

    validate_directory(dir, "locating survey workbooks")?;

    let mut workbooks = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log_warning(&format!("Failed to read directory entry: {e}"), Some(dir));
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_survey_file_name(file_name, config) {
            continue;
        }

        match extract_year(file_name, &config.year_policy) {
            Some(year) => workbooks.push(SurveyWorkbook { year, path }),
            None => log::debug!("No survey year in filename, skipping: {}", path.display()),
        }
    }

    let workbooks = workbooks.into_iter().sorted().collect_vec();

    log_workbooks_found(dir, workbooks.len());

    Ok(workbooks)
}
