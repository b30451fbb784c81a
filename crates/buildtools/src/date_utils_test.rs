use assert_matches::assert_matches;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{days_since, months_since, parse_date, years_since, DateError};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn equal_dates_are_zero_apart() {
    let today = date(2012, 3, 7);
    assert_eq!(years_since(today, today).unwrap(), 0);
    assert_eq!(months_since(today, today).unwrap(), 0);
    assert_eq!(days_since(today, today).unwrap(), 0);
}

#[test]
fn later_reference_fails() {
    let now = date(2012, 3, 7);
    let reference = date(2012, 3, 8);
    let expected = DateError::ReferenceDateInFuture { reference, now };
    assert_eq!(years_since(now, reference).unwrap_err(), expected);
    assert_eq!(months_since(now, reference).unwrap_err(), expected);
    assert_eq!(days_since(now, reference).unwrap_err(), expected);
}

#[test_case(date(2012, 3, 7), date(2008, 1, 1), 4; "later month")]
#[test_case(date(2012, 1, 7), date(2008, 3, 1), 3; "earlier month")]
#[test_case(date(2012, 3, 1), date(2011, 3, 31), 1; "same month ignores day")]
#[test_case(date(2012, 12, 31), date(2012, 1, 1), 0; "same year")]
fn years(now: NaiveDate, reference: NaiveDate, expected: u32) {
    assert_eq!(years_since(now, reference).unwrap(), expected);
}

#[test_case(date(2012, 3, 7), date(2008, 1, 1), 50; "later month")]
#[test_case(date(2012, 1, 7), date(2008, 3, 1), 46; "earlier month")]
#[test_case(date(2012, 3, 31), date(2012, 2, 29), 1; "one month")]
#[test_case(date(2012, 3, 1), date(2012, 2, 29), 1; "day of month ignored")]
fn months(now: NaiveDate, reference: NaiveDate, expected: u32) {
    assert_eq!(months_since(now, reference).unwrap(), expected);
}

#[test_case(date(2012, 3, 1), date(2012, 2, 28), 2; "leap year")]
#[test_case(date(2013, 1, 1), date(2012, 1, 1), 366; "whole leap year")]
fn days(now: NaiveDate, reference: NaiveDate, expected: u32) {
    assert_eq!(days_since(now, reference).unwrap(), expected);
}

#[test_case("2008-01-01"; "iso date")]
#[test_case("01/01/2008"; "invariant culture date")]
#[test_case("2008/01/01"; "slashed iso date")]
#[test_case("2008-01-01T23:59:59Z"; "rfc3339")]
#[test_case("2008-01-01T08:00:00+05:00"; "rfc3339 with offset")]
#[test_case("2008-01-01 10:30:00"; "date and time")]
#[test_case(" 2008-01-01\n"; "surrounding whitespace")]
fn parse_reference_date(text: &str) {
    assert_eq!(parse_date(text).unwrap(), date(2008, 1, 1));
}

#[test_case("yesterday"; "word")]
#[test_case("2008-13-01"; "month out of range")]
#[test_case(""; "empty")]
fn parse_invalid_date(text: &str) {
    assert_matches!(
        parse_date(text),
        Err(DateError::InvalidDate { text: error_text }) if error_text == text
    );
}
