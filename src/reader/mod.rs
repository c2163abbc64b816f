//! Worksheet loading
//!
//! Workbooks are read through the [`WorkbookSource`] trait so the sheet
//! loader does not care whether cells come from an `.xlsx` file on disk
//! ([`ExcelWorkbook`]) or from memory ([`MemoryWorkbook`]).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

use crate::error::{Result, WageReaderError};
use crate::models::{RawCell, RawGrid};
use crate::utils::logging::log_warning;

/// A workbook that can list its sheets and read each one into a raw grid
pub trait WorkbookSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Read one sheet into a grid whose column 0 is spreadsheet column A
    fn read_sheet(&mut self, name: &str) -> Result<RawGrid>;
}

/// A workbook file opened read-only with calamine
pub struct ExcelWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl ExcelWorkbook {
    /// Open a workbook, detecting its format from the extension
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path).map_err(|e| WageReaderError::workbook(path, e))?;
        Ok(Self { sheets })
    }
}

impl WorkbookSource for ExcelWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawGrid> {
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| WageReaderError::sheet(name, e))?;
        Ok(range_to_grid(&range))
    }
}

/// Convert a calamine cell into a raw cell
#[must_use]
pub fn raw_cell(data: &Data) -> RawCell {
    match data {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::Bool(b) => RawCell::Number(if *b { 1.0 } else { 0.0 }),
    }
}

/// Convert a calamine range into a grid anchored at column A.
///
/// calamine ranges start at the first used cell, so leading empty columns
/// are padded back in to keep column positions stable.
fn range_to_grid(range: &Range<Data>) -> RawGrid {
    let col_offset = range.start().map_or(0, |(_, col)| col as usize);
    range
        .rows()
        .map(|row| {
            std::iter::repeat_n(RawCell::Empty, col_offset)
                .chain(row.iter().map(raw_cell))
                .collect()
        })
        .collect()
}

/// An in-memory workbook, used for tests and for callers that already hold cell data
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<(String, std::result::Result<RawGrid, String>)>,
}

impl MemoryWorkbook {
    /// Create an empty workbook
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet
    #[must_use]
    pub fn with_sheet(mut self, name: impl Into<String>, grid: RawGrid) -> Self {
        self.sheets.push((name.into(), Ok(grid)));
        self
    }

    /// Add a sheet that fails to read with `message`
    #[must_use]
    pub fn with_unreadable_sheet(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.sheets.push((name.into(), Err(message.into())));
        self
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawGrid> {
        match self.sheets.iter().find(|(sheet, _)| sheet == name) {
            Some((_, Ok(grid))) => Ok(grid.clone()),
            Some((_, Err(message))) => Err(WageReaderError::sheet(name, message)),
            None => Err(WageReaderError::sheet(name, "sheet not found")),
        }
    }
}

/// Read every sheet whose name starts with `prefix`, in workbook order.
///
/// Sheets that fail to read are logged and skipped so one damaged sheet
/// does not lose the rest of the workbook.
pub fn load_industry_sheets<S: WorkbookSource + ?Sized>(
    source: &mut S,
    prefix: &str,
) -> Vec<(String, RawGrid)> {
    let mut sheets = Vec::new();
    for name in source.sheet_names() {
        if !name.starts_with(prefix) {
            log::trace!("Ignoring sheet '{name}'");
            continue;
        }
        match source.read_sheet(&name) {
            Ok(grid) => sheets.push((name, grid)),
            Err(e) => log_warning(&format!("Skipping unreadable sheet '{name}': {e}"), None),
        }
    }
    sheets
}
