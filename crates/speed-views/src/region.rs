//! Regional views: inequality index and stacked regional totals.

use std::collections::BTreeMap;

use speed_model::{SeriesView, SpeedRecord, StackedSeries, StackedView, Year};

use crate::numeric::spread;

/// Groups records by region label, ascending.
pub fn group_by_region<'a>(records: &[&'a SpeedRecord]) -> BTreeMap<&'a str, Vec<&'a SpeedRecord>> {
    let mut groups: BTreeMap<&str, Vec<&SpeedRecord>> = BTreeMap::new();
    for &record in records {
        groups.entry(record.region.as_str()).or_default().push(record);
    }
    groups
}

/// Digital inequality index: `max - min` of each region's values for `year`.
///
/// Missing values count as zero before the spread is taken, so a region with
/// one measured and one unmeasured country reports the measured speed.
pub fn inequality(records: &[&SpeedRecord], year: Year) -> SeriesView {
    group_by_region(records)
        .into_iter()
        .map(|(region, members)| {
            let values: Vec<f64> = members.iter().map(|r| r.value_or_zero(year)).collect();
            (region.to_string(), spread(&values))
        })
        .collect()
}

/// Per-year totals for each region, missing values counted as zero.
pub fn region_stacked(records: &[&SpeedRecord]) -> StackedView {
    let groups = group_by_region(records);
    if groups.is_empty() {
        return StackedView::default();
    }

    let series = Year::ALL
        .iter()
        .map(|&year| StackedSeries {
            year: year.label(),
            values: groups
                .values()
                .map(|members| members.iter().map(|r| r.value_or_zero(year)).sum())
                .collect(),
        })
        .collect();
    StackedView {
        labels: groups.keys().map(|region| (*region).to_string()).collect(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    fn sample() -> Vec<SpeedRecord> {
        vec![
            SpeedRecord::new("Alpha", "R1", "")
                .with_value(year(2023), 10.0)
                .with_value(year(2024), 15.0),
            SpeedRecord::new("Beta", "R1", "")
                .with_value(year(2023), 20.0)
                .with_value(year(2024), 18.0),
            SpeedRecord::new("Gamma", "R0", "").with_value(year(2024), 40.0),
            SpeedRecord::new("Delta", "R2", ""),
        ]
    }

    #[test]
    fn test_inequality_per_region_sorted() {
        let data = sample();
        let records: Vec<_> = data.iter().collect();
        let view = inequality(&records, year(2024));

        assert_eq!(view.labels, vec!["R0", "R1", "R2"]);
        assert_eq!(view.series, vec![0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_inequality_missing_counts_as_zero() {
        let data = sample();
        let records: Vec<_> = data.iter().collect();
        // Gamma has no 2023 value, Alpha and Beta do.
        let view = inequality(&records, year(2023));
        assert_eq!(view.series, vec![0.0, 10.0, 0.0]);

        let mixed = [
            SpeedRecord::new("A", "R", "").with_value(year(2024), 25.0),
            SpeedRecord::new("B", "R", ""),
        ];
        let records: Vec<_> = mixed.iter().collect();
        assert_eq!(inequality(&records, year(2024)).series, vec![25.0]);
    }

    #[test]
    fn test_region_stacked_sums() {
        let data = sample();
        let records: Vec<_> = data.iter().collect();
        let view = region_stacked(&records);

        assert_eq!(view.labels, vec!["R0", "R1", "R2"]);
        assert_eq!(view.series.len(), Year::COUNT);
        let y2024 = &view.series[year(2024).index()];
        assert_eq!(y2024.year, "2024");
        assert_eq!(y2024.values, vec![40.0, 33.0, 0.0]);
        let y2017 = &view.series[0];
        assert_eq!(y2017.values, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_records() {
        assert!(inequality(&[], Year::LATEST).is_empty());
        assert_eq!(region_stacked(&[]), StackedView::default());
    }
}
