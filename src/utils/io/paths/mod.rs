//! Path utilities for locating survey files.

pub mod survey;

pub use survey::{SurveyWorkbook, extract_year, find_survey_workbooks, is_survey_file_name};
