#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use wage_reader::{MemoryWorkbook, RawCell, RawGrid};

/// Title and legend rows found above the column header of every survey sheet
#[must_use]
pub fn junk_rows() -> RawGrid {
    vec![
        vec!["Table 4.5  Monthly basic and gross wages of common occupations".into()],
        vec!["June 2022".into(), RawCell::Empty, RawCell::Empty],
    ]
}

/// The column header row of a survey sheet
#[must_use]
pub fn header_row() -> Vec<RawCell> {
    vec![
        RawCell::Empty,
        "SSOC 2020".into(),
        "Occupation".into(),
        "Basic Wage 25th Percentile".into(),
        "Basic Wage Median".into(),
        "Basic Wage 75th Percentile".into(),
        "Gross Wage 25th Percentile".into(),
        "Gross Wage Median".into(),
        "Gross Wage 75th Percentile".into(),
    ]
}

/// An occupation row with the given wage cells
#[must_use]
pub fn data_row(seq: i32, code: &str, occupation: &str, wages: [RawCell; 6]) -> Vec<RawCell> {
    let mut row = vec![seq.into(), code.into(), occupation.into()];
    row.extend(wages);
    row
}

/// The carpenter row used across end-to-end tests
#[must_use]
pub fn carpenter_row() -> Vec<RawCell> {
    data_row(
        1,
        "7112",
        "Carpenter",
        [2400, 2800, 3200, 2600, 3000, 3500].map(RawCell::from),
    )
}

/// A sheet made of the usual preamble followed by `rows`
#[must_use]
pub fn survey_sheet(rows: Vec<Vec<RawCell>>) -> RawGrid {
    let mut grid = junk_rows();
    grid.push(header_row());
    grid.extend(rows);
    grid
}

/// A workbook with one industry sheet
#[must_use]
pub fn single_sheet_workbook(sheet: &str, rows: Vec<Vec<RawCell>>) -> MemoryWorkbook {
    MemoryWorkbook::new()
        .with_sheet("Contents", vec![vec!["Table of contents".into()]])
        .with_sheet(sheet, survey_sheet(rows))
}

/// Create a file that looks like a workbook by name but holds no valid data
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"not a spreadsheet").expect("failed to write fixture file");
    path
}
