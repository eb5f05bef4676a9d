//! Per-country trend lines and the global average line.

use speed_model::{Dataset, SeriesView, SpeedRecord, TrendLine, TrendView, Year};

use crate::numeric::mean;

/// One line per selected country, in selection order.
///
/// Countries are looked up across the whole dataset, whatever region is
/// selected. Missing years stay `None` (gaps). Countries not in the dataset
/// are skipped.
pub fn trend(dataset: &Dataset, countries: &[String]) -> TrendView {
    let lines = countries
        .iter()
        .filter_map(|country| dataset.by_country(country))
        .map(|record| TrendLine {
            country: record.country.clone(),
            values: record.values.iter().map(|(_, value)| value).collect(),
        })
        .collect();
    TrendView {
        years: Year::labels(),
        lines,
    }
}

/// Mean of the present values for every year.
///
/// A year without any measurement averages to zero. An empty record set
/// yields an empty view.
pub fn global_average(records: &[&SpeedRecord]) -> SeriesView {
    if records.is_empty() {
        return SeriesView::default();
    }
    Year::ALL
        .iter()
        .map(|&year| {
            let values: Vec<f64> = records.iter().filter_map(|r| r.value(year)).collect();
            (year.label(), mean(&values).unwrap_or(0.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    #[test]
    fn test_trend_keeps_gaps_and_order() {
        let dataset = Dataset::from_records(vec![
            SpeedRecord::new("Alpha", "R1", "").with_value(year(2017), 1.0),
            SpeedRecord::new("Beta", "R1", "").with_value(year(2024), 9.0),
        ]);
        let view = trend(&dataset, &["Beta".to_string(), "Alpha".to_string()]);

        assert_eq!(view.years.len(), Year::COUNT);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].country, "Beta");
        assert_eq!(view.lines[0].values[7], Some(9.0));
        assert_eq!(view.lines[0].values[0], None);
        assert_eq!(view.lines[1].values[0], Some(1.0));
    }

    #[test]
    fn test_trend_unknown_country_skipped() {
        let dataset = Dataset::from_records(vec![SpeedRecord::new("Alpha", "R1", "")]);
        let view = trend(&dataset, &["Atlantis".to_string()]);
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_global_average_ignores_missing() {
        let data = [
            SpeedRecord::new("A", "R1", "").with_value(year(2024), 10.0),
            SpeedRecord::new("B", "R1", "").with_value(year(2024), 30.0),
            SpeedRecord::new("C", "R2", ""),
        ];
        let records: Vec<_> = data.iter().collect();
        let view = global_average(&records);

        assert_eq!(view.len(), Year::COUNT);
        assert_eq!(view.labels[7], "2024");
        assert_eq!(view.series[7], 20.0);
        assert_eq!(view.series[0], 0.0);
    }

    #[test]
    fn test_global_average_empty() {
        assert!(global_average(&[]).is_empty());
    }
}
