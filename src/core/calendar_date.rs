use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// Year used when a date-only string has no usable year component.
pub const FALLBACK_YEAR: i32 = 1970;

/// Earliest year a clamped date can carry. Years below it clamp up.
pub const MIN_YEAR: i32 = 1;
/// Latest year a clamped date can carry. Years above it clamp down.
pub const MAX_YEAR: i32 = 9999;

/// Calendar day without time-of-day or timezone.
///
/// Ordering is by year, then month, then day. Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from a 1-based month, rejecting impossible days.
    pub fn new(year: i32, month: u32, day: u32) -> GanttResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                GanttError::InvalidData(format!(
                    "calendar date out of range: {year}-{month}-{day}"
                ))
            })
    }

    /// Builds a date, clamping each component into its valid range.
    ///
    /// Year is clamped to `1..=9999`, month to `1..=12` and day to
    /// `1..=days_in_month`.
    #[must_use]
    pub fn from_ymd_clamped(year: i32, month: i32, day: i32) -> Self {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        let month = month.clamp(1, 12) as u32;
        let day = day.clamp(1, days_in_month(year, month) as i32) as u32;
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Parses a `YYYY-MM-DD` string without ever failing.
    ///
    /// Components are split on `-` and read as their leading decimal digits.
    /// A missing or non-numeric year becomes [`FALLBACK_YEAR`]; a missing or
    /// non-numeric month or day becomes `1`. Out-of-range components are
    /// clamped, see [`CalendarDate::from_ymd_clamped`].
    #[must_use]
    pub fn parse_date_only(input: &str) -> Self {
        let mut parts = input.trim().split('-');
        let year = parts
            .next()
            .and_then(leading_integer)
            .unwrap_or(FALLBACK_YEAR);
        let month = parts.next().and_then(leading_integer).unwrap_or(1);
        let day = parts.next().and_then(leading_integer).unwrap_or(1);
        Self::from_ymd_clamped(year, month, day)
    }

    /// Returns the UTC calendar day of an ISO-8601 timestamp.
    ///
    /// Offsets are applied before the date is taken, so
    /// `2025-01-01T23:00:00-05:00` lands on `2025-01-02`. Timestamps without
    /// an offset and bare dates are read as UTC. Returns `None` when the
    /// input is not a valid instant.
    #[must_use]
    pub fn iso_to_calendar_date(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Some(Self(instant.with_timezone(&Utc).date_naive()));
        }
        if let Ok(instant) = DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(Self(instant.with_timezone(&Utc).date_naive()));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Some(Self(naive.date()));
            }
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().map(Self)
    }

    /// Normalizes a date field as sent by the upstream API.
    ///
    /// Values with a time part (`T` or a space separator) are timestamps;
    /// everything else is a date-only string and never fails, so a truncated
    /// `2025-03` still lands on `2025-03-01`.
    #[must_use]
    pub fn from_api_str(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input.contains(['T', ' ']) {
            return Self::iso_to_calendar_date(input);
        }
        Some(Self::parse_date_only(input))
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month, `0..=11`.
    #[must_use]
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    /// One-based month, `1..=12`.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Whole days from `self` to `other`; negative when `other` is earlier.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    #[must_use]
    pub fn add_days(self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    #[must_use]
    pub fn first_of_year(year: i32) -> Self {
        Self::from_ymd_clamped(year, 1, 1)
    }

    #[must_use]
    pub fn last_of_year(year: i32) -> Self {
        Self::from_ymd_clamped(year, 12, 31)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = GanttError;

    /// Strict `YYYY-MM-DD` parsing, unlike [`CalendarDate::parse_date_only`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| GanttError::InvalidData(format!("invalid calendar date `{s}`: {e}")))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = GanttError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Free-function form of [`CalendarDate::parse_date_only`].
#[must_use]
pub fn parse_date_only(input: &str) -> CalendarDate {
    CalendarDate::parse_date_only(input)
}

/// Free-function form of [`CalendarDate::iso_to_calendar_date`].
#[must_use]
pub fn iso_to_calendar_date(input: &str) -> Option<CalendarDate> {
    CalendarDate::iso_to_calendar_date(input)
}

#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a one-based month. Months outside `1..=12` yield 31.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn leading_integer(component: &str) -> Option<i32> {
    let component = component.trim();
    let digits_end = component
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(component.len(), |(index, _)| index);
    component[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_reads_digit_prefix() {
        assert_eq!(leading_integer("10T08:00"), Some(10));
        assert_eq!(leading_integer(" 07 "), Some(7));
        assert_eq!(leading_integer("x1"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn days_in_month_handles_leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
    }
}
