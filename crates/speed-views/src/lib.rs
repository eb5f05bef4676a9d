//! View derivation for the internet speed dashboard.
//!
//! Every function here is pure: it takes records (already region-filtered
//! where relevant) plus filter values and returns a chart-agnostic view model.
//!
//! - **ranking**: top-N speeds and most improved countries
//! - **trend**: per-country lines and the global average
//! - **region**: digital inequality index and stacked regional totals
//! - **correlation**: speed vs. improvement scatter
//! - **distribution**: speed histogram
//! - **driver**: full recomputation pass and the rendering sink seam
//!
//! Missing measurements are handled per view. Trend lines keep gaps; the
//! inequality, correlation, regional, improvement and distribution views
//! count missing as zero.

pub mod correlation;
pub mod distribution;
pub mod driver;
pub mod numeric;
pub mod ranking;
pub mod region;
pub mod trend;

pub use correlation::correlation;
pub use distribution::{SpeedBin, distribution};
pub use driver::{Recomputer, ViewSink, derive_views};
pub use numeric::{format_delta, format_speed};
pub use ranking::{most_improved, top_n};
pub use region::{group_by_region, inequality, region_stacked};
pub use trend::{global_average, trend};
