// ABOUTME: Local calendar-date utilities: parsing, formatting, weekday math
// ABOUTME: All dates are timezone-free NaiveDate values; never UTC-shifted
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Date Utilities
//!
//! Pure calendar arithmetic on local dates. Plan dates are `YYYY-MM-DD`
//! strings at the exchange boundary and [`NaiveDate`] values internally.
//! Day-of-week labels are always derived from the date, never stored as an
//! independent source of truth.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::errors::{AppError, AppResult};

/// ISO date format used at the exchange boundary
const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a local calendar date
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` if the string is not a valid ISO date.
pub fn parse_local_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, LOCAL_DATE_FORMAT)
        .map_err(|e| AppError::invalid_format(format!("expected YYYY-MM-DD, got {value:?}: {e}")))
}

/// Format a local calendar date as `YYYY-MM-DD`
#[must_use]
pub fn format_local_date(date: NaiveDate) -> String {
    date.format(LOCAL_DATE_FORMAT).to_string()
}

/// Day-of-week label derived from the date
#[must_use]
pub fn weekday_label(date: NaiveDate) -> &'static str {
    weekday_name(date.weekday())
}

/// Canonical English name for a weekday
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive weekday name lookup ("monday", "Monday", "MONDAY")
#[must_use]
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Add a signed number of days to a date
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Number of whole-or-partial weeks between two dates, `ceil(days / 7)`
///
/// Returns 0 when `to` is on or before `from`; callers that need a minimum
/// viable plan clamp to 1.
#[must_use]
pub fn weeks_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let days = (to - from).num_days();
    if days <= 0 {
        0
    } else {
        (days + 6) / 7
    }
}

/// The Monday on or before the given date
///
/// Training weeks are Monday-aligned so every week carries all seven
/// weekdays, which rest-day reconciliation relies on.
#[must_use]
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    let offset = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(offset)
}
