//! Chart-agnostic view models.
//!
//! Each derivation produces one of these. They carry only labels and numbers;
//! how they are drawn is up to the rendering side.

use serde::{Deserialize, Serialize};

use crate::filter::{ImprovementWindow, RegionFilter};
use crate::year::Year;

/// Labels paired with one numeric series (bar and line charts).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesView {
    pub labels: Vec<String>,
    pub series: Vec<f64>,
}

impl SeriesView {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.series.iter().copied())
    }
}

impl FromIterator<(String, f64)> for SeriesView {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, series) = iter.into_iter().unzip();
        Self { labels, series }
    }
}

/// One country's line across all years. Missing years are gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub country: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendView {
    pub years: Vec<String>,
    pub lines: Vec<TrendLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
}

/// Per-region totals for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedSeries {
    pub year: String,
    pub values: Vec<f64>,
}

/// Region labels with one stacked series per year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedView {
    pub labels: Vec<String>,
    pub series: Vec<StackedSeries>,
}

/// Record counts per speed bin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DistributionView {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl DistributionView {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Every view for one recomputation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    pub year: Year,
    pub region: RegionFilter,
    pub top_n: usize,
    pub improvement: ImprovementWindow,
    pub top_speeds: SeriesView,
    pub most_improved: SeriesView,
    pub trend: TrendView,
    pub inequality: SeriesView,
    pub correlation: ScatterView,
    pub region_stacked: StackedView,
    pub distribution: DistributionView,
    pub global_average: SeriesView,
}
