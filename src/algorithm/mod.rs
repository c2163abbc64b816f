//! Derived series over the wage table

pub mod growth;

pub use growth::{GrowthPoint, year_over_year_growth};
