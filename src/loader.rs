//! Survey workbook loading and aggregation
//!
//! Each workbook is processed independently into a batch of records; the
//! aggregator then folds every batch into the canonical table (concatenate,
//! drop duplicate keys keeping the first seen, sort).

use std::time::Instant;

use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::collections::WageTable;
use crate::config::WageReaderConfig;
use crate::error::Result;
use crate::models::WageRecord;
use crate::models::RawGrid;
use crate::reader::{ExcelWorkbook, WorkbookSource, load_industry_sheets};
use crate::registry::Industry;
use crate::sheet::process_sheet;
use crate::utils::io::paths::{SurveyWorkbook, find_survey_workbooks};
use crate::utils::logging::{
    log_operation_start, log_table_built, log_warning, log_workbook_loaded,
};

/// Process every industry sheet of one workbook for `year`.
///
/// Sheets whose code has no industry mapping are skipped.
pub fn process_workbook<S: WorkbookSource + ?Sized>(
    source: &mut S,
    year: i32,
    sheet_prefix: &str,
) -> Vec<WageRecord> {
    process_industry_sheets(load_industry_sheets(source, sheet_prefix), year)
}

fn process_industry_sheets(sheets: Vec<(String, RawGrid)>, year: i32) -> Vec<WageRecord> {
    sheets
        .into_iter()
        .filter_map(|(name, grid)| match Industry::from_sheet_code(&name) {
            Some(industry) => Some(process_sheet(&grid, year, industry.label())),
            None => {
                log::debug!("Ignoring sheet '{name}' with unmapped industry code");
                None
            }
        })
        .flatten()
        .collect()
}

/// Open and process one survey workbook from disk.
///
/// A workbook that cannot be opened contributes no records.
#[must_use]
pub fn load_survey_workbook(workbook: &SurveyWorkbook, config: &WageReaderConfig) -> Vec<WageRecord> {
    let start = Instant::now();
    log_operation_start("Loading data from", &workbook.path);

    let mut source = match ExcelWorkbook::open(&workbook.path) {
        Ok(source) => source,
        Err(e) => {
            log_warning(&format!("Skipping unreadable workbook ({e})"), Some(&workbook.path));
            return Vec::new();
        }
    };

    let sheets = load_industry_sheets(&mut source, &config.sheet_prefix);
    let sheet_count = sheets.len();
    let records = process_industry_sheets(sheets, workbook.year);
    log_workbook_loaded(
        &workbook.path,
        workbook.year,
        sheet_count,
        records.len(),
        start.elapsed(),
    );
    records
}

/// Fold record batches into the canonical table.
///
/// When two records share (year, industry, occupation) the one seen first in
/// batch order wins. The result is sorted by year, industry and occupation.
#[must_use]
pub fn aggregate<I>(batches: I) -> WageTable
where
    I: IntoIterator<Item = Vec<WageRecord>>,
{
    let mut seen = FxHashSet::default();
    let mut duplicates = 0usize;

    let mut records: Vec<WageRecord> = batches
        .into_iter()
        .flatten()
        .filter(|record| {
            let fresh = seen.insert(record.key());
            if !fresh {
                duplicates += 1;
            }
            fresh
        })
        .collect();

    if duplicates > 0 {
        log::debug!("Dropped {duplicates} records with duplicate keys");
    }

    records.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then_with(|| a.industry.cmp(&b.industry))
            .then_with(|| a.occupation.cmp(&b.occupation))
    });

    WageTable::from_canonical(records)
}

/// Load the given workbooks and aggregate them.
///
/// Batches are collected in workbook order whether or not they are processed
/// in parallel, so both paths produce the same table.
#[must_use]
pub fn load_workbooks(
    workbooks: &[SurveyWorkbook],
    config: &WageReaderConfig,
    progress: Option<&ProgressBar>,
) -> WageTable {
    let load = |workbook: &SurveyWorkbook| {
        let records = load_survey_workbook(workbook, config);
        if let Some(pb) = progress {
            pb.inc(1);
        }
        records
    };

    let batches: Vec<Vec<WageRecord>> = if config.parallel {
        workbooks.par_iter().map(load).collect()
    } else {
        workbooks.iter().map(load).collect()
    };

    aggregate(batches)
}

/// Locate, load and aggregate every survey workbook in the configured directory.
///
/// An empty directory gives an empty table.
///
/// # Errors
/// Returns an error only if the data directory cannot be read
pub fn load_wage_data(config: &WageReaderConfig) -> Result<WageTable> {
    let start = Instant::now();
    let workbooks = find_survey_workbooks(config)?;
    let table = load_workbooks(&workbooks, config, None);

    log_table_built(&config.data_dir, workbooks.len(), table.len(), start.elapsed());
    Ok(table)
}
