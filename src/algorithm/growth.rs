//! Year-over-year wage growth

use serde::{Deserialize, Serialize};

use crate::models::{WageField, WageRecord};

/// One year of a growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: i32,
    pub value: Option<f64>,
    /// Percentage change from the previous row; `None` for the first row,
    /// when either value is missing, or when the previous value is zero
    pub growth_pct: Option<f64>,
}

/// Growth of `field` across a year-ordered series such as the output of
/// [`WageTable::filter`](crate::collections::WageTable::filter)
#[must_use]
pub fn year_over_year_growth(rows: &[&WageRecord], field: WageField) -> Vec<GrowthPoint> {
    let mut previous: Option<f64> = None;
    rows.iter()
        .map(|row| {
            let value = row.wage(field);
            let growth_pct = match (previous, value) {
                (Some(prev), Some(cur)) if prev != 0.0 => Some((cur - prev) / prev * 100.0),
                _ => None,
            };
            previous = value;
            GrowthPoint {
                year: row.year,
                value,
                growth_pct,
            }
        })
        .collect()
}
