//! Calendar-aware differences between a date and an earlier reference date.

#[cfg(test)]
#[path = "date_utils_test.rs"]
mod date_utils_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("The reference date {reference} must not be later than the current date {now}.")]
    ReferenceDateInFuture { reference: NaiveDate, now: NaiveDate },
    #[error("'{text}' is not a valid date.")]
    InvalidDate { text: String },
}

// Formats accepted for a reference date without a time of day.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
// Formats accepted for a reference date with a time of day, which is dropped.
const DATE_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Parses the date part of a textual date, or date and time.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    let trimmed = text.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format).ok().map(|moment| moment.date())
            })
        })
        .ok_or_else(|| DateError::InvalidDate { text: text.to_owned() })
}

/// Whole years from `reference` to `now`. Only the months are compared, not the day of the month:
/// 2012-03-01 is one year after 2011-03-31.
pub fn years_since(now: NaiveDate, reference: NaiveDate) -> Result<u32, DateError> {
    ensure_not_in_future(now, reference)?;
    let mut years = now.year() - reference.year();
    if now.month() < reference.month() {
        years -= 1;
    }
    // Non-negative since `reference <= now`.
    Ok(years.unsigned_abs())
}

/// Whole months from `reference` to `now`, ignoring the day of the month.
pub fn months_since(now: NaiveDate, reference: NaiveDate) -> Result<u32, DateError> {
    let years = years_since(now, reference)?;
    let months = if now.month() < reference.month() {
        now.month() + 12 - reference.month()
    } else {
        now.month() - reference.month()
    };
    Ok(months + years * 12)
}

/// Whole days from `reference` to `now`.
pub fn days_since(now: NaiveDate, reference: NaiveDate) -> Result<u32, DateError> {
    ensure_not_in_future(now, reference)?;
    Ok(now.signed_duration_since(reference).num_days().unsigned_abs() as u32)
}

fn ensure_not_in_future(now: NaiveDate, reference: NaiveDate) -> Result<(), DateError> {
    if reference > now {
        return Err(DateError::ReferenceDateInFuture { reference, now });
    }
    Ok(())
}
