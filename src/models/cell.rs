//! Typed raw cell values
//!
//! Worksheets are read into a grid of [`RawCell`] values before any
//! interpretation happens. Only the header locator and the row classifier
//! look inside these cells.

use std::fmt;

/// A single untyped worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// No value
    Empty,
    /// Textual value, as stored in the sheet
    Text(String),
    /// Numeric value
    Number(f64),
}

/// One worksheet row
pub type RawRow = Vec<RawCell>;

/// A worksheet as rows of cells, column 0 being spreadsheet column A
pub type RawGrid = Vec<RawRow>;

impl RawCell {
    /// Whether the cell is empty or holds only whitespace
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Interpret the cell as a number, parsing text if needed
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Text view of the cell, `None` when empty
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            // Whole numbers print without a fractional part, so a code
            // stored as 7112.0 reads back as "7112"
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawCell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawCell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for RawCell {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for RawCell {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
