//! Calendar date parsing and the date error shared by the store and calendar.

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by trade files and the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A malformed or out-of-range calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDateError {
    #[error("month index {month} is out of range (expected 0-11)")]
    Month { month: i64 },

    #[error("year {year} is outside the supported calendar range")]
    Year { year: i64 },

    #[error("'{input}' is not a valid YYYY-MM-DD date")]
    Parse { input: String },

    #[error("'{input}' is not a valid YYYY-MM month")]
    ParseMonth { input: String },
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible days such as 2023-02-29.
pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDateError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| InvalidDateError::Parse {
        input: input.to_string(),
    })
}
