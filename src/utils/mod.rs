//! Utility modules for file discovery and logging

pub mod io;
pub mod logging;

pub use io::paths::{SurveyWorkbook, find_survey_workbooks};
pub use logging::{log_operation_start, log_warning};
