//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, WageReaderError};

/// Check if a directory exists and is readable, with rich error information
///
/// # Arguments
/// * `path` - The directory to check
/// * `purpose` - Why the directory is needed (for error context)
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(WageReaderError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Directory not found: {} (needed for {purpose})", path.display()),
        )));
    }

    if !path.is_dir() {
        return Err(WageReaderError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Path is not a directory: {} (expected a directory for {purpose})",
                path.display()
            ),
        )));
    }

    // Try to read the directory to check permissions
    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check directory permissions".to_string()
                }
                _ => format!("Failed to read directory for {purpose}"),
            };
            Err(WageReaderError::Io(io::Error::new(
                e.kind(),
                format!("{context}: {} ({e})", path.display()),
            )))
        }
    }
}
