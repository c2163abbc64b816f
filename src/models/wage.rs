//! Wage record model
//!
//! A [`WageRecord`] is one occupation's percentile wages for one survey year
//! and one industry.

use serde::{Deserialize, Serialize};

/// One row of the canonical wage table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WageRecord {
    /// Survey year
    pub year: i32,
    /// Resolved industry label
    pub industry: String,
    /// Occupation classification code as printed in the source, may be empty
    #[serde(rename = "SSOCCode")]
    pub ssoc_code: String,
    /// Occupation title, trimmed
    pub occupation: String,
    pub basic_p25: Option<f64>,
    pub basic_median: Option<f64>,
    pub basic_p75: Option<f64>,
    pub gross_p25: Option<f64>,
    pub gross_median: Option<f64>,
    pub gross_p75: Option<f64>,
}

/// Deduplication key of the canonical table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub year: i32,
    pub industry: String,
    pub occupation: String,
}

/// The six percentile wage columns, in source column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WageField {
    BasicP25,
    BasicMedian,
    BasicP75,
    GrossP25,
    GrossMedian,
    GrossP75,
}

impl WageField {
    /// All fields in source column order
    pub const ALL: [WageField; 6] = [
        WageField::BasicP25,
        WageField::BasicMedian,
        WageField::BasicP75,
        WageField::GrossP25,
        WageField::GrossMedian,
        WageField::GrossP75,
    ];

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WageField::BasicP25 => "Basic P25",
            WageField::BasicMedian => "Basic Median",
            WageField::BasicP75 => "Basic P75",
            WageField::GrossP25 => "Gross P25",
            WageField::GrossMedian => "Gross Median",
            WageField::GrossP75 => "Gross P75",
        }
    }
}

impl WageRecord {
    /// The deduplication key of this record
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            year: self.year,
            industry: self.industry.clone(),
            occupation: self.occupation.clone(),
        }
    }

    /// Value of a single wage field
    #[must_use]
    pub fn wage(&self, field: WageField) -> Option<f64> {
        match field {
            WageField::BasicP25 => self.basic_p25,
            WageField::BasicMedian => self.basic_median,
            WageField::BasicP75 => self.basic_p75,
            WageField::GrossP25 => self.gross_p25,
            WageField::GrossMedian => self.gross_median,
            WageField::GrossP75 => self.gross_p75,
        }
    }

    /// All six wage values in source column order
    #[must_use]
    pub fn wages(&self) -> [Option<f64>; 6] {
        WageField::ALL.map(|field| self.wage(field))
    }
}
