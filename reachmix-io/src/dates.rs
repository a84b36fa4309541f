//! Calendar date parsing.

use crate::errors::{IoError, IoResult};
use chrono::NaiveDate;

/// Format used for dates in output files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const YEAR_DIGITS: usize = 4;
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parse a `YYYY-MM-DD` or `YYYY/MM/DD` date.
///
/// Surrounding whitespace is ignored and the separator must be used
/// consistently. The year is exactly four digits in 1..=9999. Any other
/// input, or a day that does not exist in the calendar, is a
/// [`IoError::DateFormat`] carrying the offending text.
pub fn parse_date(text: &str) -> IoResult<NaiveDate> {
    let trimmed = text.trim();
    let parts: Vec<&str> = match trimmed.split('-').collect::<Vec<_>>() {
        parts if parts.len() == 3 => parts,
        _ => trimmed.split('/').collect(),
    };
    let invalid = || IoError::DateFormat(text.to_string());

    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };
    if year.len() != YEAR_DIGITS {
        return Err(invalid());
    }
    let year: i32 = parse_digits(year)
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(invalid)?;
    let month: u32 = parse_digits(month).ok_or_else(invalid)?;
    let day: u32 = parse_digits(day).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_digits<T: std::str::FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
