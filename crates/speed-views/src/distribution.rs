//! Speed distribution histogram.

use std::fmt;

use speed_model::{DistributionView, SpeedRecord, Year};

/// Half-open speed bins, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedBin {
    UnderTen,
    TenToFifty,
    FiftyToHundred,
    HundredToTwoHundred,
    TwoHundredPlus,
}

impl SpeedBin {
    pub const ALL: [SpeedBin; 5] = [
        Self::UnderTen,
        Self::TenToFifty,
        Self::FiftyToHundred,
        Self::HundredToTwoHundred,
        Self::TwoHundredPlus,
    ];

    /// Lower bound (inclusive) in Mbps.
    pub const fn lower(self) -> f64 {
        match self {
            Self::UnderTen => 0.0,
            Self::TenToFifty => 10.0,
            Self::FiftyToHundred => 50.0,
            Self::HundredToTwoHundred => 100.0,
            Self::TwoHundredPlus => 200.0,
        }
    }

    /// Upper bound (exclusive) in Mbps; `None` for the open top bin.
    pub const fn upper(self) -> Option<f64> {
        match self {
            Self::UnderTen => Some(10.0),
            Self::TenToFifty => Some(50.0),
            Self::FiftyToHundred => Some(100.0),
            Self::HundredToTwoHundred => Some(200.0),
            Self::TwoHundredPlus => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderTen => "0-10",
            Self::TenToFifty => "10-50",
            Self::FiftyToHundred => "50-100",
            Self::HundredToTwoHundred => "100-200",
            Self::TwoHundredPlus => "200+",
        }
    }

    /// The bin holding `value`. Speeds are non-negative, so anything below
    /// ten lands in the first bin.
    pub fn for_value(value: f64) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|bin| bin.upper().is_none_or(|upper| value < upper))
            .unwrap_or(Self::TwoHundredPlus)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SpeedBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts records per speed bin for `year`, missing values counted as zero.
///
/// Every record lands in exactly one bin.
pub fn distribution(records: &[&SpeedRecord], year: Year) -> DistributionView {
    let mut counts = [0usize; SpeedBin::ALL.len()];
    for record in records {
        counts[SpeedBin::for_value(record.value_or_zero(year)).index()] += 1;
    }
    DistributionView {
        labels: SpeedBin::ALL.iter().map(|bin| bin.label().to_string()).collect(),
        counts: counts.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_boundaries_are_half_open() {
        assert_eq!(SpeedBin::for_value(0.0), SpeedBin::UnderTen);
        assert_eq!(SpeedBin::for_value(9.99), SpeedBin::UnderTen);
        assert_eq!(SpeedBin::for_value(10.0), SpeedBin::TenToFifty);
        assert_eq!(SpeedBin::for_value(50.0), SpeedBin::FiftyToHundred);
        assert_eq!(SpeedBin::for_value(100.0), SpeedBin::HundredToTwoHundred);
        assert_eq!(SpeedBin::for_value(199.99), SpeedBin::HundredToTwoHundred);
        assert_eq!(SpeedBin::for_value(200.0), SpeedBin::TwoHundredPlus);
        assert_eq!(SpeedBin::for_value(1e6), SpeedBin::TwoHundredPlus);
    }

    #[test]
    fn test_bins_are_contiguous() {
        for pair in SpeedBin::ALL.windows(2) {
            assert_eq!(pair[0].upper(), Some(pair[1].lower()));
        }
    }

    #[test]
    fn test_distribution_counts_missing_as_zero() {
        let data = [
            SpeedRecord::new("A", "R", "").with_value(Year::LATEST, 5.0),
            SpeedRecord::new("B", "R", "").with_value(Year::LATEST, 75.0),
            SpeedRecord::new("C", "R", "").with_value(Year::LATEST, 250.0),
            SpeedRecord::new("D", "R", ""),
        ];
        let records: Vec<_> = data.iter().collect();
        let view = distribution(&records, Year::LATEST);

        assert_eq!(view.labels, vec!["0-10", "10-50", "50-100", "100-200", "200+"]);
        assert_eq!(view.counts, vec![2, 0, 1, 0, 1]);
        assert_eq!(view.total(), 4);
    }

    #[test]
    fn test_distribution_empty() {
        let view = distribution(&[], Year::LATEST);
        assert_eq!(view.labels.len(), 5);
        assert_eq!(view.total(), 0);
    }
}
