//! Locating the first occupation row of a worksheet
//!
//! Survey sheets carry a variable number of title, legend and column header
//! rows above the data. The only reliable marker of the first data row is a
//! printed sequence number in column A together with an occupation title in
//! column C.

use crate::models::{RawCell, RawRow};

/// Column holding the printed row sequence number
pub const SEQUENCE_COLUMN: usize = 0;

/// Column holding the occupation title
pub const OCCUPATION_COLUMN: usize = 2;

/// Text that marks the column header row
pub const HEADER_MARKER: &str = "Occupation";

/// Text that marks the first section header
pub const SECTION_MARKER: &str = "MANAGERS";

/// Whether `row` is the first row of occupation data.
///
/// A row qualifies when its first cell is a number, its third cell holds
/// text, and that text contains neither the header marker nor the section
/// marker. Both marker checks are case-sensitive substring tests.
#[must_use]
pub fn is_data_start_row(row: &RawRow) -> bool {
    let has_sequence = row
        .get(SEQUENCE_COLUMN)
        .and_then(RawCell::as_number)
        .is_some();
    if !has_sequence {
        return false;
    }

    match row.get(OCCUPATION_COLUMN) {
        Some(cell) if !cell.is_blank() => {
            let text = cell.to_string();
            !text.contains(HEADER_MARKER) && !text.contains(SECTION_MARKER)
        }
        _ => false,
    }
}

/// Index of the first data row in `grid`, `None` when no row qualifies
#[must_use]
pub fn find_data_start_row(grid: &[RawRow]) -> Option<usize> {
    grid.iter().position(is_data_start_row)
}
