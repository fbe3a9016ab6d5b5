//! Country usage bundle

use serde::{Deserialize, Serialize};

/// Top countries by visits, in the source table's (descending) order
///
/// `codes` holds an empty string for every entry when the table layout
/// carries no country codes, so all arrays stay the same length.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryUsage {
    pub codes: Vec<String>,
    pub names: Vec<String>,
    pub visits: Vec<u64>,
    /// Share of the grand total, one decimal place with a trailing `%`
    pub percents: Vec<String>,
    /// Grand total of visits the percentages are computed against
    pub total_visits: u64,
    /// Aggregate of every country beyond the display cap
    pub other: Option<RollupSlice>,
}

/// The rolled-up "other" slice
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupSlice {
    pub visits: u64,
    pub percent: String,
}

impl CountryUsage {
    pub fn push(&mut self, code: String, name: String, visits: u64, percent: String) {
        self.codes.push(code);
        self.names.push(name);
        self.visits.push(visits);
        self.percents.push(percent);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sum of the displayed entries' visits
    pub fn displayed_visits(&self) -> u64 {
        self.visits.iter().sum()
    }
}
