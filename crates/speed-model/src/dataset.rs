//! Immutable collection of speed records.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::filter::RegionFilter;
use crate::record::SpeedRecord;
use crate::year::Year;

/// The records loaded for a session.
///
/// Built once and read-only afterwards; a reload builds a new dataset.
/// Country names are unique and never empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<SpeedRecord>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset, dropping records without a country and keeping the
    /// first record for each repeated country. Input order is preserved.
    pub fn from_records(records: impl IntoIterator<Item = SpeedRecord>) -> Self {
        Self::build(records).0
    }

    /// Like [`Dataset::from_records`], also returning the repeated-country
    /// records that were rejected, in input order.
    pub fn build(records: impl IntoIterator<Item = SpeedRecord>) -> (Self, Vec<SpeedRecord>) {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut duplicates = Vec::new();
        for record in records {
            if record.country.trim().is_empty() {
                continue;
            }
            if seen.insert(record.country.clone()) {
                kept.push(record);
            } else {
                duplicates.push(record);
            }
        }
        (Self { records: kept }, duplicates)
    }

    pub fn records(&self) -> &[SpeedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Country names, ascending (case-sensitive).
    pub fn all_countries(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.records.iter().map(|r| r.country.as_str()).collect();
        names.into_iter().collect()
    }

    /// Distinct region labels, ascending.
    pub fn all_regions(&self) -> Vec<&str> {
        let regions: BTreeSet<&str> = self.records.iter().map(|r| r.region.as_str()).collect();
        regions.into_iter().collect()
    }

    pub fn by_region(&self, region: &RegionFilter) -> Vec<&SpeedRecord> {
        self.records
            .iter()
            .filter(|record| region.matches(&record.region))
            .collect()
    }

    pub fn by_country(&self, name: &str) -> Option<&SpeedRecord> {
        self.records.iter().find(|record| record.country == name)
    }

    /// Most recent year for which any record has a measurement.
    pub fn latest_year_with_data(&self) -> Option<Year> {
        Year::ALL
            .iter()
            .rev()
            .copied()
            .find(|&year| self.records.iter().any(|r| r.value(year).is_some()))
    }
}
