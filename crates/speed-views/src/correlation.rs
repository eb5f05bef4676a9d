//! Speed vs. year-over-year improvement scatter.

use speed_model::{ScatterPoint, ScatterView, SpeedRecord, Year};

/// One point per record: `x` is the speed in `year`, `y` the change from the
/// previous year. Missing values are zero on both axes; the first year has no
/// predecessor, so its previous value is zero too.
pub fn correlation(records: &[&SpeedRecord], year: Year) -> ScatterView {
    let points = records
        .iter()
        .map(|record| {
            let speed = record.value_or_zero(year);
            let previous = year.previous().map_or(0.0, |prev| record.value_or_zero(prev));
            ScatterPoint {
                x: speed,
                y: speed - previous,
                label: record.country.clone(),
            }
        })
        .collect();
    ScatterView { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    #[test]
    fn test_points_per_record() {
        let data = [
            SpeedRecord::new("Alpha", "R1", "")
                .with_value(year(2023), 10.0)
                .with_value(year(2024), 15.0),
            SpeedRecord::new("Beta", "R1", "").with_value(year(2023), 20.0),
        ];
        let records: Vec<_> = data.iter().collect();
        let view = correlation(&records, year(2024));

        assert_eq!(view.points.len(), 2);
        assert_eq!(view.points[0].label, "Alpha");
        assert_eq!((view.points[0].x, view.points[0].y), (15.0, 5.0));
        assert_eq!((view.points[1].x, view.points[1].y), (0.0, -20.0));
    }

    #[test]
    fn test_first_year_has_no_predecessor() {
        let data = [SpeedRecord::new("Alpha", "R1", "").with_value(Year::FIRST, 12.0)];
        let records: Vec<_> = data.iter().collect();
        let view = correlation(&records, Year::FIRST);
        assert_eq!((view.points[0].x, view.points[0].y), (12.0, 12.0));
    }
}
