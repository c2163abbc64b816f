//! Error handling for the wage reader.
//!
//! Only failures that prevent the source directory from being read at all
//! surface to callers. Workbook, sheet and row problems are logged and skipped
//! by the ingestion path; the variants below exist so the pieces that do fail
//! can say why before they are skipped.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the wage reader
#[derive(Debug, thiserror::Error)]
pub enum WageReaderError {
    /// Error opening or reading a file or directory
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A workbook could not be opened or its sheet list could not be read
    #[error("Workbook error in {}: {message}", .path.display())]
    Workbook {
        /// Path of the offending workbook
        path: PathBuf,
        /// Underlying reader message
        message: String,
    },

    /// A single worksheet could not be parsed
    #[error("Sheet error in '{sheet}': {message}")]
    Sheet {
        /// Name of the offending worksheet
        sheet: String,
        /// Underlying reader message
        message: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WageReaderError {
    /// Create a workbook error from any displayable reader error
    pub fn workbook(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self::Workbook {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Create a sheet error from any displayable reader error
    pub fn sheet(sheet: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Sheet {
            sheet: sheet.into(),
            message: error.to_string(),
        }
    }
}

/// Result type for wage reader operations
pub type Result<T> = std::result::Result<T, WageReaderError>;
