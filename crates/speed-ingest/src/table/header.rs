//! Header analysis for the speed table.

use speed_model::Year;

/// Column holding the country name.
pub const COUNTRY_COLUMN: &str = "country";
/// Column holding the region label.
pub const REGION_COLUMN: &str = "region";
/// Column holding the major-area label.
pub const MAJOR_AREA_COLUMN: &str = "major_area";

/// Result of header analysis.
#[derive(Debug, Clone)]
pub struct SpeedHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl SpeedHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Years whose `year <YYYY>` column is absent.
    pub fn missing_years(&self) -> Vec<Year> {
        Year::ALL
            .iter()
            .copied()
            .filter(|year| !self.contains(&year.column_name()))
            .collect()
    }
}

/// Normalizes a header value: strips a UTF-8 BOM and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(columns: &[&str]) -> SpeedHeaders {
        SpeedHeaders::new(columns.iter().map(|c| normalize_header(c)).collect())
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  country  "), "country");
        assert_eq!(normalize_header("\u{feff}country"), "country");
    }

    #[test]
    fn test_missing_years() {
        let headers = headers(&["country", "region", "year 2017", "year 2024"]);
        let missing = headers.missing_years();
        assert_eq!(missing.len(), Year::COUNT - 2);
        assert!(!missing.contains(&Year::FIRST));
        assert!(!missing.contains(&Year::LATEST));
    }

    #[test]
    fn test_empty_headers() {
        assert!(headers(&[""]).is_empty());
        assert!(!headers(&["country"]).is_empty());
        assert_eq!(headers(&["country", "region"]).len(), 2);
    }
}
