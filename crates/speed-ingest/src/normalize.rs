//! Raw row to [`SpeedRecord`] normalization.

use speed_model::{SpeedRecord, Year, valid_speed};

use crate::table::{COUNTRY_COLUMN, MAJOR_AREA_COLUMN, REGION_COLUMN, RawRow};

/// Parses a speed cell.
///
/// Accepts plain and scientific notation, surrounding whitespace and
/// well-formed thousands groups ("1,234.5"). Empty, unparseable, negative
/// or non-finite input yields `None`; so does a stray separator ("1,5").
pub fn parse_speed(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if trimmed.contains(',') {
        strip_thousands(trimmed)?.parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };
    parsed.ok().and_then(valid_speed)
}

/// Removes the commas from `d{1,3}(,ddd)+(.d+)?`; anything else is rejected.
fn strip_thousands(value: &str) -> Option<String> {
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };
    if let Some(fraction) = fraction
        && (fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let mut groups = integer.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !lead.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits = lead.to_string();
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    if let Some(fraction) = fraction {
        digits.push('.');
        digits.push_str(fraction);
    }
    Some(digits)
}

fn field<'a>(row: &'a RawRow, key: &str) -> &'a str {
    row.get(key).map_or("", |value| value.trim())
}

/// Normalizes one raw row.
///
/// Returns `None` when the row has no country; that is a silent drop, not an
/// error. Year cells that do not hold a usable speed become missing.
pub fn normalize_row(row: &RawRow) -> Option<SpeedRecord> {
    let country = field(row, COUNTRY_COLUMN);
    if country.is_empty() {
        return None;
    }

    let mut record = SpeedRecord::new(
        country,
        field(row, REGION_COLUMN),
        field(row, MAJOR_AREA_COLUMN),
    );
    for year in Year::ALL {
        let value = row
            .get(&year.column_name())
            .map(String::as_str)
            .and_then(parse_speed);
        record.values.set(year, value);
    }
    Some(record)
}
