//! The canonical wage table and its read-only queries
//!
//! A [`WageTable`] only comes out of the aggregator, so its records are
//! always unique by (year, industry, occupation) and sorted by that key.

use std::collections::BTreeSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::models::WageRecord;
use crate::registry::industry_labels;

/// Deduplicated, sorted wage records from one load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WageTable {
    records: Vec<WageRecord>,
}

/// Counts describing a loaded table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Number of records
    pub records: usize,
    /// Distinct survey years, ascending
    pub years: Vec<i32>,
    /// Distinct industries present in the data
    pub industries: usize,
    /// Distinct occupation titles
    pub occupations: usize,
}

/// Outcome of resolving a user-typed occupation against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupationMatch {
    /// Case-insensitive exact match
    Exact(String),
    /// No exact match, but exactly one occupation contains the input
    Suggest(String),
    /// Several occupations contain the input, ranked as by search
    Ambiguous(Vec<String>),
    /// Nothing matches
    NotFound,
}

impl WageTable {
    /// Wrap records that are already unique and sorted
    pub(crate) fn from_canonical(records: Vec<WageRecord>) -> Self {
        Self { records }
    }

    /// Build a table from arbitrary records, applying deduplication and sorting
    #[must_use]
    pub fn from_records(records: Vec<WageRecord>) -> Self {
        crate::loader::aggregate([records])
    }

    /// All records in canonical order
    #[must_use]
    pub fn records(&self) -> &[WageRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct occupation titles, sorted
    #[must_use]
    pub fn unique_occupations(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.occupation.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Every industry label, whether or not the table has rows for it
    #[must_use]
    pub fn industries() -> Vec<&'static str> {
        industry_labels()
    }

    /// Distinct survey years, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).sorted().dedup().collect()
    }

    /// Rows for one occupation in one industry, ordered by year.
    ///
    /// The occupation compares case-insensitively, the industry exactly. An
    /// industry with no rows gives an empty result.
    #[must_use]
    pub fn filter(&self, occupation: &str, industry: &str) -> Vec<&WageRecord> {
        let wanted = occupation.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.industry == industry && r.occupation.to_lowercase() == wanted)
            .sorted_by_key(|r| r.year)
            .collect()
    }

    /// Occupations containing `term`, case-insensitively.
    ///
    /// Titles starting with the term come first, then titles containing it
    /// elsewhere; each group stays alphabetical. An empty term matches
    /// nothing.
    #[must_use]
    pub fn search_occupations(&self, term: &str) -> Vec<String> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let (starts, contains): (Vec<String>, Vec<String>) = self
            .unique_occupations()
            .into_iter()
            .filter(|occ| occ.to_lowercase().contains(&needle))
            .partition(|occ| occ.to_lowercase().starts_with(&needle));

        starts.into_iter().chain(contains).collect()
    }

    /// Resolve user input to an occupation title
    #[must_use]
    pub fn resolve_occupation(&self, input: &str) -> OccupationMatch {
        let wanted = input.trim().to_lowercase();
        if wanted.is_empty() {
            return OccupationMatch::NotFound;
        }

        if let Some(exact) = self
            .unique_occupations()
            .into_iter()
            .find(|occ| occ.to_lowercase() == wanted)
        {
            return OccupationMatch::Exact(exact);
        }

        let mut partial = self.search_occupations(input);
        match partial.len() {
            0 => OccupationMatch::NotFound,
            1 => OccupationMatch::Suggest(partial.remove(0)),
            _ => OccupationMatch::Ambiguous(partial),
        }
    }

    /// Summary counts of the table
    #[must_use]
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            records: self.records.len(),
            years: self.years(),
            industries: self.records.iter().map(|r| r.industry.as_str()).unique().count(),
            occupations: self.records.iter().map(|r| r.occupation.as_str()).unique().count(),
        }
    }
}
