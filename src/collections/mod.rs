//! Collections over loaded wage records

pub mod wage_table;

pub use wage_table::{OccupationMatch, TableSummary, WageTable};
