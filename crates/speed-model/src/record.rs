//! Per-country speed records.

use serde::{Deserialize, Serialize};

use crate::year::Year;

/// Returns the value if it is a usable speed measurement (finite, non-negative).
pub fn valid_speed(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// One optional measurement per year in [`Year::ALL`].
///
/// A missing measurement is stored as `None`; it is never coerced to zero here.
/// Views that treat missing as zero do so explicitly via [`YearValues::or_zero`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearValues([Option<f64>; Year::COUNT]);

impl YearValues {
    pub fn get(&self, year: Year) -> Option<f64> {
        self.0[year.index()]
    }

    pub fn or_zero(&self, year: Year) -> f64 {
        self.get(year).unwrap_or(0.0)
    }

    /// Stores a value, discarding negative or non-finite input as missing.
    pub fn set(&mut self, year: Year, value: Option<f64>) {
        self.0[year.index()] = value.and_then(valid_speed);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, Option<f64>)> + '_ {
        Year::ALL.iter().map(|&year| (year, self.get(year)))
    }

    pub fn has_any(&self) -> bool {
        self.0.iter().any(Option::is_some)
    }
}

/// Normalized measurements for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedRecord {
    pub country: String,
    pub region: String,
    pub major_area: String,
    pub values: YearValues,
}

impl SpeedRecord {
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        major_area: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            major_area: major_area.into(),
            values: YearValues::default(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, year: Year, value: f64) -> Self {
        self.values.set(year, Some(value));
        self
    }

    pub fn value(&self, year: Year) -> Option<f64> {
        self.values.get(year)
    }

    pub fn value_or_zero(&self, year: Year) -> f64 {
        self.values.or_zero(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    #[test]
    fn test_missing_is_not_zero() {
        let record = SpeedRecord::new("Norway", "Europe", "Northern Europe");
        assert_eq!(record.value(year(2020)), None);
        assert_eq!(record.value_or_zero(year(2020)), 0.0);
        assert!(!record.values.has_any());
    }

    #[test]
    fn test_invalid_values_become_missing() {
        let record = SpeedRecord::new("A", "R", "M")
            .with_value(year(2017), -3.0)
            .with_value(year(2018), f64::NAN)
            .with_value(year(2019), f64::INFINITY)
            .with_value(year(2020), 0.0);
        assert_eq!(record.value(year(2017)), None);
        assert_eq!(record.value(year(2018)), None);
        assert_eq!(record.value(year(2019)), None);
        assert_eq!(record.value(year(2020)), Some(0.0));
    }

    #[test]
    fn test_iter_covers_all_years() {
        let record = SpeedRecord::new("A", "R", "M").with_value(year(2024), 42.5);
        let values: Vec<_> = record.values.iter().collect();
        assert_eq!(values.len(), Year::COUNT);
        assert_eq!(values[7], (Year::LATEST, Some(42.5)));
    }
}
