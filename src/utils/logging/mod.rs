//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and progress tracking.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{
    log_operation_start, log_table_built, log_warning, log_workbook_loaded, log_workbooks_found,
};
pub use progress::{ProgressLogWriter, create_main_progress_bar, finish_and_clear};
