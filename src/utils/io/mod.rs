//! Input/output utilities

pub mod paths;
