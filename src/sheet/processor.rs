//! Turning one worksheet into wage records

use log::{debug, trace};

use crate::models::{RawGrid, WageRecord};
use crate::sheet::classify::{RowClass, classify_row, extract_record};
use crate::sheet::header::find_data_start_row;

/// Process one sheet into records for a single (year, industry) pair.
///
/// A sheet whose data start cannot be located yields no records. Rows that
/// cannot be extracted are dropped individually.
#[must_use]
pub fn process_sheet(grid: &RawGrid, year: i32, industry: &str) -> Vec<WageRecord> {
    let Some(start) = find_data_start_row(grid) else {
        debug!("No data start row found for {industry} ({year}); sheet contributes no records");
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (idx, row) in grid.iter().enumerate().skip(start) {
        match classify_row(row) {
            RowClass::Blank => {}
            RowClass::SectionHeader(title) => trace!("Row {idx}: section header '{title}'"),
            RowClass::Occupation(_) => match extract_record(row, year, industry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    dropped += 1;
                    debug!("Row {idx} of {industry} ({year}) dropped: {e}");
                }
            },
        }
    }

    debug!(
        "Processed {industry} ({year}): {} records, {dropped} rows dropped",
        records.len()
    );
    records
}
