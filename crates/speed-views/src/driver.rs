//! Recomputation driver.
//!
//! Every filter change triggers one full pass: all views are derived again
//! from the shared dataset and handed to a [`ViewSink`]. Passes are
//! synchronous and never overlap.

use std::sync::Arc;

use speed_model::{DashboardViews, Dataset, FilterState};

use crate::correlation::correlation;
use crate::distribution::distribution;
use crate::ranking::{most_improved, top_n};
use crate::region::{inequality, region_stacked};
use crate::trend::{global_average, trend};

/// Derives every view for one filter state.
///
/// Region filtering applies to all views except the trend lines, which look
/// countries up across the whole dataset so a selected country stays visible
/// whatever region is chosen.
pub fn derive_views(dataset: &Dataset, filters: &FilterState) -> DashboardViews {
    let year = filters.resolve_year(dataset);
    let top = filters.top_n_or_default();
    let filtered = dataset.by_region(&filters.region);

    DashboardViews {
        year,
        region: filters.region.clone(),
        top_n: top,
        improvement: filters.improvement,
        top_speeds: top_n(&filtered, year, top),
        most_improved: most_improved(&filtered, filters.improvement),
        trend: trend(dataset, &filters.countries),
        inequality: inequality(&filtered, year),
        correlation: correlation(&filtered, year),
        region_stacked: region_stacked(&filtered),
        distribution: distribution(&filtered, year),
        global_average: global_average(&filtered),
    }
}

/// Receives the views of each recomputation pass.
pub trait ViewSink {
    type Error;

    fn render(&mut self, views: &DashboardViews) -> Result<(), Self::Error>;
}

impl<S: ViewSink + ?Sized> ViewSink for Box<S> {
    type Error = S::Error;

    fn render(&mut self, views: &DashboardViews) -> Result<(), Self::Error> {
        (**self).render(views)
    }
}

/// Re-derives views whenever the filters change and forwards them to a sink.
pub struct Recomputer<S> {
    dataset: Arc<Dataset>,
    sink: S,
    passes: u64,
}

impl<S: ViewSink> Recomputer<S> {
    pub fn new(dataset: Arc<Dataset>, sink: S) -> Self {
        Self {
            dataset,
            sink,
            passes: 0,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Swaps in a freshly loaded dataset. The next pass uses it.
    pub fn replace_dataset(&mut self, dataset: Arc<Dataset>) {
        self.dataset = dataset;
    }

    /// Number of completed passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs one recomputation pass for `filters` and renders the result.
    pub fn on_filters_changed(&mut self, filters: &FilterState) -> Result<(), S::Error> {
        self.passes += 1;
        let span = tracing::debug_span!("recompute", pass = self.passes);
        let _guard = span.enter();

        let views = derive_views(&self.dataset, filters);
        tracing::debug!(
            year = %views.year,
            region = %views.region,
            top_speeds = views.top_speeds.len(),
            trend_lines = views.trend.lines.len(),
            regions = views.inequality.len(),
            "Derived dashboard views"
        );
        self.sink.render(&views)
    }
}
