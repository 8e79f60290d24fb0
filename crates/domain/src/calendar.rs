// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Week-to-date sequencing.
//!
//! Week `w` (1-based) is played on `start_date + 7 * (w - 1)` days.
//! Only calendar dates are involved; there is no timezone handling.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be written in
/// that form.
pub fn format_calendar_date(date: Date) -> Result<String, DomainError> {
    date.format(ISO_DATE)
        .map_err(|e| DomainError::DateFormatError {
            date,
            error: e.to_string(),
        })
}

/// Returns the match date of week `week` (1-based).
///
/// # Errors
///
/// Returns an error if:
/// - `week` is zero
/// - the resulting date falls outside the supported calendar range
pub fn week_date(start_date: Date, week: u32) -> Result<Date, DomainError> {
    if week == 0 {
        return Err(DomainError::InvalidWeekIndex { index: week });
    }

    let offset: Duration = Duration::weeks(i64::from(week - 1));
    start_date
        .checked_add(offset)
        .ok_or(DomainError::DateArithmeticOverflow {
            start_date,
            weeks: week - 1,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_week_one_is_start_date() {
        let start = Date::from_calendar_date(2024, Month::January, 1).unwrap();
        assert_eq!(week_date(start, 1).unwrap(), start);
    }

    #[test]
    fn test_week_dates_advance_by_seven_days() {
        let start = Date::from_calendar_date(2024, Month::January, 1).unwrap();
        assert_eq!(
            week_date(start, 2).unwrap(),
            Date::from_calendar_date(2024, Month::January, 8).unwrap()
        );
        assert_eq!(
            week_date(start, 9).unwrap(),
            Date::from_calendar_date(2024, Month::February, 26).unwrap()
        );
    }

    #[test]
    fn test_week_dates_cross_leap_day() {
        let start = Date::from_calendar_date(2024, Month::February, 22).unwrap();
        assert_eq!(
            week_date(start, 2).unwrap(),
            Date::from_calendar_date(2024, Month::February, 29).unwrap()
        );
    }

    #[test]
    fn test_week_zero_is_rejected() {
        let start = Date::from_calendar_date(2024, Month::January, 1).unwrap();
        assert_eq!(
            week_date(start, 0),
            Err(DomainError::InvalidWeekIndex { index: 0 })
        );
    }

    #[test]
    fn test_week_date_overflow() {
        let result = week_date(Date::MAX, 2);
        assert!(matches!(
            result,
            Err(DomainError::DateArithmeticOverflow { weeks: 1, .. })
        ));
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(
            parse_calendar_date(" 2024-01-01 ").unwrap(),
            Date::from_calendar_date(2024, Month::January, 1).unwrap()
        );
        assert!(matches!(
            parse_calendar_date("2024-02-30"),
            Err(DomainError::DateParseError { .. })
        ));
        assert!(matches!(
            parse_calendar_date(""),
            Err(DomainError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_format_calendar_date() {
        let date = Date::from_calendar_date(2024, Month::March, 4).unwrap();
        assert_eq!(format_calendar_date(date).unwrap(), "2024-03-04");
    }

    #[test]
    fn test_format_calendar_date_pads_year() {
        let date = Date::from_calendar_date(987, Month::December, 25).unwrap();
        assert_eq!(format_calendar_date(date).unwrap(), "0987-12-25");
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let date = Date::from_calendar_date(2025, Month::September, 6).unwrap();
        let text: String = format_calendar_date(date).unwrap();
        assert_eq!(parse_calendar_date(&text).unwrap(), date);
    }
}
