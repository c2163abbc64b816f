//! Data models for raw worksheet cells and normalized wage records.

pub mod cell;
pub mod wage;

pub use cell::{RawCell, RawGrid, RawRow};
pub use wage::{RecordKey, WageField, WageRecord};
