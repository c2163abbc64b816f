//! A Rust library for ingesting wage survey workbooks into one canonical,
//! deduplicated table of percentile wages keyed by year, industry and
//! occupation.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod reader;
pub mod registry;
pub mod sheet;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{WageReaderConfig, YearPolicy};
pub use error::{Result, WageReaderError};
pub use models::{RawCell, RawGrid, RecordKey, WageField, WageRecord};
pub use registry::Industry;

// Loading
pub use loader::{aggregate, load_wage_data, load_workbooks, process_workbook};
pub use reader::{ExcelWorkbook, MemoryWorkbook, WorkbookSource};
pub use sheet::process_sheet;
pub use utils::{SurveyWorkbook, find_survey_workbooks};

// Queries
pub use algorithm::{GrowthPoint, year_over_year_growth};
pub use collections::{OccupationMatch, TableSummary, WageTable};
