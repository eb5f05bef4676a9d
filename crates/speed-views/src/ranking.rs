//! Ranking views: top speeds and most improved.

use speed_model::{ImprovementWindow, MOST_IMPROVED_LIMIT, SeriesView, SpeedRecord, Year};

use crate::numeric::rank_descending;

/// The `n` fastest records for `year`.
///
/// Records without a measurement for `year` are excluded. Ties are broken by
/// ascending country name.
pub fn top_n(records: &[&SpeedRecord], year: Year, n: usize) -> SeriesView {
    let mut ranked: Vec<(f64, &str)> = records
        .iter()
        .filter_map(|record| Some((record.value(year)?, record.country.as_str())))
        .collect();
    ranked.sort_by(|a, b| rank_descending(*a, *b));
    ranked
        .into_iter()
        .take(n)
        .map(|(value, country)| (country.to_string(), value))
        .collect()
}

/// Records ranked by the change in speed across `window`, at most
/// [`MOST_IMPROVED_LIMIT`] entries.
///
/// Missing values count as zero on both ends, so a country first measured in
/// `window.to` shows its whole speed as improvement.
pub fn most_improved(records: &[&SpeedRecord], window: ImprovementWindow) -> SeriesView {
    let mut ranked: Vec<(f64, &str)> = records
        .iter()
        .map(|record| {
            let delta = record.value_or_zero(window.to) - record.value_or_zero(window.from);
            (delta, record.country.as_str())
        })
        .collect();
    ranked.sort_by(|a, b| rank_descending(*a, *b));
    ranked
        .into_iter()
        .take(MOST_IMPROVED_LIMIT)
        .map(|(delta, country)| (country.to_string(), delta))
        .collect()
}
