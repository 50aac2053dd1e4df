//! Date grammar used by todo.txt date tags

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Canonical textual date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Four-digit year, two-digit month and day at the start of the input
fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").unwrap())
}

/// A date string did not match `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed date: '{input}'")]
pub struct DateParseError {
    pub input: String,
}

/// Parse a date starting with `YYYY-MM-DD`
///
/// Anything after the day is ignored, so `2021-01-10T09:00` is 2021-01-10.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let malformed = || DateParseError {
        input: input.to_string(),
    };

    let caps = date_regex().captures(input).ok_or_else(malformed)?;
    let year = caps[1].parse::<i32>().map_err(|_| malformed())?;
    let month = caps[2].parse::<u32>().map_err(|_| malformed())?;
    let day = caps[3].parse::<u32>().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Best-effort variant of [`parse_date`]: malformed input yields `None`
pub fn parse_date_opt(input: &str) -> Option<NaiveDate> {
    match parse_date(input) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::trace!(%err, "ignoring unparseable date");
            None
        }
    }
}
