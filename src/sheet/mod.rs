//! Worksheet interpretation: locating data, classifying rows and cleaning values.

pub mod classify;
pub mod header;
pub mod processor;

pub use classify::{RowClass, RowError, classify_row, clean_wage_value, extract_record, is_section_header};
pub use header::{find_data_start_row, is_data_start_row};
pub use processor::process_sheet;
