//! Logging utilities
//!
//! Standard messages for the ingestion steps, so every workbook and every
//! load reports the same way.

use std::path::Path;
use std::time::Duration;

/// Log the start of a step that works on `path`
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the outcome of a directory scan
pub fn log_workbooks_found(dir: &Path, workbooks: usize) {
    if workbooks == 0 {
        log::warn!("No survey workbooks found in {}", dir.display());
    } else {
        log::info!("Found {workbooks} survey workbooks in {}", dir.display());
    }
}

/// Log one processed workbook
///
/// # Arguments
/// * `path` - Workbook path
/// * `year` - Survey year of the workbook
/// * `sheets` - Survey sheets that matched the sheet prefix
/// * `records` - Records produced before deduplication
/// * `elapsed` - Time spent on the workbook
pub fn log_workbook_loaded(path: &Path, year: i32, sheets: usize, records: usize, elapsed: Duration) {
    if sheets == 0 {
        log::warn!(
            "No survey sheets read from {} ({year})",
            path.display()
        );
    }
    log::info!(
        "Loaded {records} records from {sheets} survey sheets of {} ({year}) in {elapsed:?}",
        path.display()
    );
}

/// Log a finished load of the canonical table
pub fn log_table_built(dir: &Path, workbooks: usize, records: usize, elapsed: Duration) {
    log::info!(
        "Built wage table of {records} records from {workbooks} workbooks in {} in {elapsed:?}",
        dir.display()
    );
}

/// Log a recoverable problem; the caller skips the item and carries on
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{}: {}", message, path.display()),
        None => log::warn!("{message}"),
    }
}
