//! Shared numeric and formatting helpers.

use std::cmp::Ordering;

/// Orders `(value, label)` pairs by descending value, then ascending label.
///
/// Values are compared with `total_cmp`, so the order is total even for
/// unusual floats.
pub fn rank_descending(a: (f64, &str), b: (f64, &str)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1))
}

/// Arithmetic mean, or `None` for an empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `max - min` over the values; zero for an empty input.
pub fn spread(values: &[f64]) -> f64 {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let (min, max) = iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
    max - min
}

/// Formats a speed for display; missing renders as `-`.
pub fn format_speed(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2} Mbps"),
        None => "-".to_string(),
    }
}

/// Formats a change in speed with an explicit sign.
pub fn format_delta(value: f64) -> String {
    format!("{value:+.2} Mbps")
}
