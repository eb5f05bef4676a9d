//! Dataset construction and loading.

use std::path::Path;

use speed_model::Dataset;

use crate::error::Result;
use crate::normalize::normalize_row;
use crate::table::{RawRow, read_speed_rows};

/// Default location of the speed table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "internet_speeds.csv";

/// Builds a dataset from raw rows. Never fails.
///
/// Rows without a country are dropped silently. When a country repeats, the
/// first row wins and the repeat is logged.
pub fn build_dataset(rows: &[RawRow]) -> Dataset {
    let records: Vec<_> = rows.iter().filter_map(normalize_row).collect();
    let dropped = rows.len() - records.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Dropped rows without a country");
    }

    let (dataset, duplicates) = Dataset::build(records);
    for record in &duplicates {
        tracing::warn!(country = %record.country, "Duplicate country row ignored");
    }
    dataset
}

/// Reads and normalizes the speed table at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let (_headers, rows) = read_speed_rows(path)?;
    let dataset = build_dataset(&rows);
    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        countries = dataset.len(),
        regions = dataset.all_regions().len(),
        "Loaded speed dataset"
    );
    Ok(dataset)
}

/// Loads the speed table, degrading to an empty dataset on failure.
///
/// The failure is logged once; every view computed from the empty dataset
/// is empty.
pub fn load_dataset_or_empty(path: &Path) -> Dataset {
    match load_dataset(path) {
        Ok(dataset) => dataset,
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "Failed to load speed dataset");
            Dataset::empty()
        }
    }
}
