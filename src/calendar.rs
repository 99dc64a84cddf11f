//! Date formatting and day arithmetic.

use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Duration, Local, NaiveDateTime};

/// Pattern used when the caller has no preference.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats the current local date and time with a strftime pattern.
pub fn date_str(format: &str) -> Result<String> {
    format_date(&Local::now().naive_local(), format)
}

/// Formats `date` with a strftime pattern.
///
/// Unknown specifiers are rejected with [`Error::DateFormat`].
///
/// ```
/// use chrono::NaiveDate;
/// use sequtils::{format_date, DEFAULT_DATE_FORMAT};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(format_date(&date, DEFAULT_DATE_FORMAT).unwrap(), "2024-01-15");
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::DateFormat(format.to_string()));
    }

    Ok(date.format_with_items(items.into_iter()).to_string())
}

/// Whole days from `start` to `end`.
///
/// Partial days round toward negative infinity, so an `end` 36 hours
/// before `start` is two days back rather than one. Sub-second remainders
/// count as partial days too.
pub fn days_diff(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let delta = end - start;
    let whole = delta.num_days();

    // num_days truncates toward zero
    if delta < Duration::days(whole) {
        whole - 1
    } else {
        whole
    }
}
