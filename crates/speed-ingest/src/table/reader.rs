//! CSV reading into raw row maps.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::header::{COUNTRY_COLUMN, SpeedHeaders, normalize_header};

/// One source row: column name to trimmed cell text.
pub type RawRow = BTreeMap<String, String>;

/// Checks that the file is not UTF-16 encoded.
///
/// A UTF-8 BOM is accepted and stripped from the header row.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads the speed table at `path` into raw rows.
pub fn read_speed_rows(path: &Path) -> Result<(SpeedHeaders, Vec<RawRow>)> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
    read_speed_rows_from(file, path)
}

/// Reads a speed table from any reader. `source` is only used in errors and logs.
///
/// Rows whose cells are all blank are skipped. Short rows are accepted; their
/// trailing columns are simply absent from the row map. Cells that are not
/// valid UTF-8 are decoded lossily rather than failing the read.
pub fn read_speed_rows_from<R: Read>(input: R, source: &Path) -> Result<(SpeedHeaders, Vec<RawRow>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns: Vec<String> = reader
        .byte_headers()
        .map_err(|e| IngestError::csv(source.to_path_buf(), &e))?
        .iter()
        .map(|cell| normalize_header(&String::from_utf8_lossy(cell)))
        .collect();
    let headers = SpeedHeaders::new(columns);

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    if !headers.contains(COUNTRY_COLUMN) {
        return Err(IngestError::MissingColumn {
            column: COUNTRY_COLUMN.to_string(),
            path: source.to_path_buf(),
        });
    }

    let missing_years = headers.missing_years();
    if !missing_years.is_empty() {
        tracing::warn!(
            path = %source.display(),
            missing = ?missing_years,
            "Speed table lacks some year columns; those years will be empty"
        );
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| IngestError::csv(source.to_path_buf(), &e))?;
        // Invalid UTF-8 only spoils its own cell.
        let cells: Vec<String> = record
            .iter()
            .map(|cell| String::from_utf8_lossy(cell).trim().to_string())
            .collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let row: RawRow = headers.columns.iter().cloned().zip(cells).collect();
        rows.push(row);
    }

    tracing::debug!(path = %source.display(), rows = rows.len(), "Read speed table");
    Ok((headers, rows))
}
