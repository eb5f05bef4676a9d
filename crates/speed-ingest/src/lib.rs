//! Internet speed table ingestion.
//!
//! Reads the delimited speed table, normalizes each row into a
//! [`speed_model::SpeedRecord`] and builds the session [`speed_model::Dataset`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use speed_ingest::load_dataset_or_empty;
//!
//! let dataset = load_dataset_or_empty(Path::new("internet_speeds.csv"));
//! println!("{} countries", dataset.len());
//! ```

mod error;
mod loader;
mod normalize;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{
    COUNTRY_COLUMN, MAJOR_AREA_COLUMN, REGION_COLUMN, RawRow, SpeedHeaders, read_speed_rows,
    read_speed_rows_from, validate_encoding,
};

// === Normalization ===
pub use normalize::{normalize_row, parse_speed};

// === Dataset Loading ===
pub use loader::{DEFAULT_DATA_PATH, build_dataset, load_dataset, load_dataset_or_empty};
