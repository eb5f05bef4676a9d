//! Speed table reading utilities.

mod header;
mod reader;

pub use header::{COUNTRY_COLUMN, MAJOR_AREA_COLUMN, REGION_COLUMN, SpeedHeaders};
pub use reader::{RawRow, read_speed_rows, read_speed_rows_from, validate_encoding};
