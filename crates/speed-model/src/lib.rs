//! Data model for the internet speed dashboard.
//!
//! Records, the fixed year set, the session dataset, filter state and the
//! view models handed to the rendering side.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod record;
pub mod view;
pub mod year;

pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use filter::{
    ALL_REGIONS, DEFAULT_TOP_N, FilterState, ImprovementWindow, MOST_IMPROVED_LIMIT,
    RegionFilter, parse_top_n,
};
pub use record::{SpeedRecord, YearValues, valid_speed};
pub use view::{
    DashboardViews, DistributionView, ScatterPoint, ScatterView, SeriesView, StackedSeries,
    StackedView, TrendLine, TrendView,
};
pub use year::{YEAR_COLUMN_PREFIX, Year};
