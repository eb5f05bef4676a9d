//! Dashboard filter state.
//!
//! The filter state is plain data owned by whoever drives the dashboard. It is
//! passed by reference into every recomputation pass and never mutated there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{ModelError, Result};
use crate::year::Year;

/// Number of entries in ranking views when no top-N is selected.
pub const DEFAULT_TOP_N: usize = 10;

/// Number of entries in the most-improved view.
pub const MOST_IMPROVED_LIMIT: usize = 10;

/// Sentinel accepted in place of a region name to select every region.
pub const ALL_REGIONS: &str = "all";

/// Region selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionFilter {
    #[default]
    All,
    Named(String),
}

impl RegionFilter {
    /// Parses a region selector; the `all` sentinel is case-insensitive and
    /// an empty selector also means every region.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_REGIONS) {
            Self::All
        } else {
            Self::Named(trimmed.to_string())
        }
    }

    pub fn matches(&self, region: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == region,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for RegionFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Year pair compared by the most-improved view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementWindow {
    pub from: Year,
    pub to: Year,
}

impl Default for ImprovementWindow {
    fn default() -> Self {
        Self {
            from: Year::ALL[Year::COUNT - 2],
            to: Year::LATEST,
        }
    }
}

impl fmt::Display for ImprovementWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Parses a top-N selector. Zero is rejected.
pub fn parse_top_n(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ModelError::InvalidTopN {
            value: value.to_string(),
        }),
    }
}

/// Current dashboard selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Countries shown in the trend view, in selection order.
    pub countries: Vec<String>,
    pub region: RegionFilter,
    /// Selected year; `None` means the most recent year with data.
    pub year: Option<Year>,
    /// Ranking length; `None` or zero means [`DEFAULT_TOP_N`].
    pub top_n: Option<usize>,
    pub improvement: ImprovementWindow,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region(mut self, region: RegionFilter) -> Self {
        self.region = region;
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.select_country(country);
        self
    }

    #[must_use]
    pub fn with_improvement(mut self, window: ImprovementWindow) -> Self {
        self.improvement = window;
        self
    }

    /// Adds a country to the selection. Returns false if it was already selected.
    pub fn select_country(&mut self, country: impl Into<String>) -> bool {
        let country = country.into();
        if self.countries.contains(&country) {
            return false;
        }
        self.countries.push(country);
        true
    }

    /// Removes a country from the selection. Returns false if it was not selected.
    pub fn deselect_country(&mut self, country: &str) -> bool {
        let before = self.countries.len();
        self.countries.retain(|c| c != country);
        self.countries.len() != before
    }

    pub fn clear_countries(&mut self) {
        self.countries.clear();
    }

    pub fn top_n_or_default(&self) -> usize {
        match self.top_n {
            Some(n) if n > 0 => n,
            _ => DEFAULT_TOP_N,
        }
    }

    /// Resolves the selected year against the dataset.
    pub fn resolve_year(&self, dataset: &Dataset) -> Year {
        self.year
            .or_else(|| dataset.latest_year_with_data())
            .unwrap_or(Year::LATEST)
    }
}

impl FromStr for RegionFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SpeedRecord;

    #[test]
    fn test_region_sentinel() {
        assert_eq!(RegionFilter::parse("all"), RegionFilter::All);
        assert_eq!(RegionFilter::parse("All"), RegionFilter::All);
        assert_eq!(RegionFilter::parse(""), RegionFilter::All);
        assert_eq!(
            RegionFilter::parse(" Europe "),
            RegionFilter::Named("Europe".to_string())
        );
    }

    #[test]
    fn test_region_matches() {
        assert!(RegionFilter::All.matches("Asia"));
        let europe = RegionFilter::Named("Europe".to_string());
        assert!(europe.matches("Europe"));
        assert!(!europe.matches("europe"));
    }

    #[test]
    fn test_top_n_defaults() {
        assert_eq!(FilterState::new().top_n_or_default(), DEFAULT_TOP_N);
        assert_eq!(FilterState::new().with_top_n(0).top_n_or_default(), DEFAULT_TOP_N);
        assert_eq!(FilterState::new().with_top_n(3).top_n_or_default(), 3);
    }

    #[test]
    fn test_parse_top_n() {
        assert_eq!(parse_top_n("5"), Ok(5));
        assert!(parse_top_n("0").is_err());
        assert!(parse_top_n("ten").is_err());
    }

    #[test]
    fn test_country_selection_keeps_order_without_duplicates() {
        let mut filters = FilterState::new();
        assert!(filters.select_country("Chile"));
        assert!(filters.select_country("Albania"));
        assert!(!filters.select_country("Chile"));
        assert_eq!(filters.countries, vec!["Chile", "Albania"]);
        assert!(filters.deselect_country("Chile"));
        assert!(!filters.deselect_country("Chile"));
        assert_eq!(filters.countries, vec!["Albania"]);
    }

    #[test]
    fn test_resolve_year() {
        let y2019 = Year::new(2019).unwrap();
        let dataset = Dataset::from_records(vec![
            SpeedRecord::new("A", "R", "M").with_value(y2019, 1.0),
        ]);
        assert_eq!(FilterState::new().resolve_year(&dataset), y2019);
        assert_eq!(FilterState::new().resolve_year(&Dataset::empty()), Year::LATEST);
        let explicit = FilterState::new().with_year(Year::FIRST);
        assert_eq!(explicit.resolve_year(&dataset), Year::FIRST);
    }

    #[test]
    fn test_default_improvement_window() {
        let window = ImprovementWindow::default();
        assert_eq!(window.from, Year::new(2023).unwrap());
        assert_eq!(window.to, Year::new(2024).unwrap());
    }
}
