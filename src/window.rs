//! Trailing date window used by the temperature observations endpoint.

use chrono::{Duration, NaiveDate};

use crate::error::{ClimateError, Result};

/// Storage format of measurement dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing observation window in days
pub const WINDOW_DAYS: i64 = 365;

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_stored_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ClimateError::InvalidStoredDate {
        value: value.to_string(),
    })
}

/// Inclusive lower bound of the window ending at `most_recent`.
///
/// This is a plain 365 day subtraction, so across a leap day the bound lands
/// one calendar day later than "same date last year".
pub fn window_start(most_recent: NaiveDate) -> NaiveDate {
    most_recent - Duration::days(WINDOW_DAYS)
}

/// Window start for a date as stored, formatted back into storage form so it
/// can be compared against the `date` column.
pub fn window_start_for(most_recent: &str) -> Result<String> {
    let date = parse_stored_date(most_recent)?;
    Ok(window_start(date).format(DATE_FORMAT).to_string())
}
