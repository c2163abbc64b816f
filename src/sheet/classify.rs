//! Row classification and wage value cleaning
//!
//! Rows below the data start are either blank separators, section headers
//! introducing a block of occupations (`MANAGERS`, `PROFESSIONALS`), or
//! occupation rows with a fixed column layout:
//!
//! | col | content |
//! |---|---|
//! | 0 | printed row number (ignored) |
//! | 1 | SSOC code |
//! | 2 | occupation title |
//! | 3..=5 | basic wage P25 / median / P75 |
//! | 6..=8 | gross wage P25 / median / P75 |

use crate::models::{RawCell, RawRow, WageRecord};
use crate::sheet::header::OCCUPATION_COLUMN;

/// Column holding the SSOC code
pub const SSOC_COLUMN: usize = 1;

/// First of the six wage columns
pub const FIRST_WAGE_COLUMN: usize = 3;

/// Number of wage columns
pub const WAGE_COLUMNS: usize = 6;

/// Marker the survey prints in place of a suppressed statistic
pub const SUPPRESSION_MARKER: &str = "s";

/// Section headers span at most this many words
pub const MAX_SECTION_HEADER_WORDS: usize = 3;

/// Classification of a single data-region row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// No occupation title
    Blank,
    /// Heading that introduces a group of occupations
    SectionHeader(String),
    /// An occupation row; holds the trimmed title
    Occupation(String),
}

/// A row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The row ends before the last wage column
    #[error("row has {found} cells, expected at least {expected}")]
    TooShort {
        /// Cells required
        expected: usize,
        /// Cells present
        found: usize,
    },

    /// The row is not an occupation row
    #[error("row is not an occupation row")]
    NotOccupation,
}

/// Clean a single wage cell.
///
/// Empty cells, the suppression marker (any case, surrounding whitespace
/// ignored) and anything that does not parse as a non-negative finite number
/// become `None`. A suppressed value is missing, never zero.
#[must_use]
pub fn clean_wage_value(cell: &RawCell) -> Option<f64> {
    let value = match cell {
        RawCell::Empty => return None,
        RawCell::Number(n) => *n,
        RawCell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(SUPPRESSION_MARKER) {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Whether a trimmed title is a section header: upper-case with at most
/// three words.
///
/// Upper-case means at least one cased letter and no lower-case letter, so
/// `R&D MANAGERS` is a header and `2020` is not.
#[must_use]
pub fn is_section_header(title: &str) -> bool {
    let has_upper = title.chars().any(char::is_uppercase);
    let has_lower = title.chars().any(char::is_lowercase);

    has_upper && !has_lower && title.split_whitespace().count() <= MAX_SECTION_HEADER_WORDS
}

/// Classify a row by its occupation cell
#[must_use]
pub fn classify_row(row: &RawRow) -> RowClass {
    let title = match row.get(OCCUPATION_COLUMN).and_then(RawCell::as_text) {
        Some(text) => text.trim().to_string(),
        None => return RowClass::Blank,
    };

    if title.is_empty() {
        RowClass::Blank
    } else if is_section_header(&title) {
        RowClass::SectionHeader(title)
    } else {
        RowClass::Occupation(title)
    }
}

/// Build a record from an occupation row.
///
/// Either every field is extracted or the row is rejected; a record is never
/// built from part of a row.
pub fn extract_record(
    row: &RawRow,
    year: i32,
    industry: &str,
) -> std::result::Result<WageRecord, RowError> {
    let RowClass::Occupation(occupation) = classify_row(row) else {
        return Err(RowError::NotOccupation);
    };

    let expected = FIRST_WAGE_COLUMN + WAGE_COLUMNS;
    if row.len() < expected {
        return Err(RowError::TooShort {
            expected,
            found: row.len(),
        });
    }

    let ssoc_code = row[SSOC_COLUMN]
        .as_text()
        .map(|code| code.trim().to_string())
        .unwrap_or_default();

    let wages = &row[FIRST_WAGE_COLUMN..expected];

    Ok(WageRecord {
        year,
        industry: industry.to_string(),
        ssoc_code,
        occupation,
        basic_p25: clean_wage_value(&wages[0]),
        basic_median: clean_wage_value(&wages[1]),
        basic_p75: clean_wage_value(&wages[2]),
        gross_p25: clean_wage_value(&wages[3]),
        gross_median: clean_wage_value(&wages[4]),
        gross_p75: clean_wage_value(&wages[5]),
    })
}
