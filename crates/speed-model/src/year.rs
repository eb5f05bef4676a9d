//! The fixed measurement years.
//!
//! Every record carries one slot per year in [`Year::ALL`]; the set never
//! varies between records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Column-name prefix used by the source table (`year 2017`, `year 2018`, ...).
pub const YEAR_COLUMN_PREFIX: &str = "year ";

const FIRST_YEAR: u16 = 2017;
const LAST_YEAR: u16 = 2024;

/// One of the eight measurement years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Number of measurement years.
    pub const COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

    pub const FIRST: Year = Year(FIRST_YEAR);
    pub const LATEST: Year = Year(LAST_YEAR);

    /// All years in ascending order.
    pub const ALL: [Year; Self::COUNT] = [
        Year(2017),
        Year(2018),
        Year(2019),
        Year(2020),
        Year(2021),
        Year(2022),
        Year(2023),
        Year(2024),
    ];

    /// Returns the year if it belongs to the measurement set.
    pub const fn new(value: u16) -> Option<Self> {
        if value >= FIRST_YEAR && value <= LAST_YEAR {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position of this year inside [`Year::ALL`].
    pub const fn index(self) -> usize {
        (self.0 - FIRST_YEAR) as usize
    }

    /// The preceding measurement year, if any.
    pub const fn previous(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    /// Source column holding this year's value.
    pub fn column_name(self) -> String {
        format!("{YEAR_COLUMN_PREFIX}{}", self.0)
    }

    pub fn label(self) -> String {
        self.0.to_string()
    }

    /// Labels for every year, in order.
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().copied().map(Self::label).collect()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ModelError::UnknownYear {
                value: s.to_string(),
            })
    }
}

impl TryFrom<u16> for Year {
    type Error = ModelError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value).ok_or_else(|| ModelError::UnknownYear {
            value: value.to_string(),
        })
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}
