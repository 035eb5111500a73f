use serde::{Deserialize, Serialize};

use crate::core::calendar_date::{MAX_YEAR, MIN_YEAR};
use crate::core::{CalendarDate, DateRange};
use crate::error::{GanttError, GanttResult};

/// Number of month columns in a year window.
pub const MONTHS_PER_YEAR: u32 = 12;

/// How dates are bucketed into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowMode {
    /// One column per month of a calendar year.
    Year { year: i32 },
    /// One column per day, starting at the window start.
    Days { total_days: u32 },
}

/// Bounded calendar span that date ranges are projected onto.
///
/// Both bounds are inclusive. `column_count` is `12` in year mode and the
/// number of days in day mode; it is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    mode: WindowMode,
    start: CalendarDate,
    end: CalendarDate,
}

impl VisibleWindow {
    /// January 1st through December 31st of `year`.
    ///
    /// Years outside `MIN_YEAR..=MAX_YEAR` clamp to the nearest supported
    /// year, so `year(0)` is the year-1 window. Use [`VisibleWindow::try_year`]
    /// to reject them instead.
    #[must_use]
    pub fn year(year: i32) -> Self {
        let start = CalendarDate::first_of_year(year);
        Self {
            mode: WindowMode::Year { year: start.year() },
            start,
            end: CalendarDate::last_of_year(start.year()),
        }
    }

    /// Year window, rejecting years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn try_year(year: i32) -> GanttResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GanttError::InvalidWindow(format!(
                "year {year} is outside {MIN_YEAR}..={MAX_YEAR}"
            )));
        }
        Ok(Self::year(year))
    }

    /// `total_days` consecutive days beginning at `start`.
    pub fn days(start: CalendarDate, total_days: u32) -> GanttResult<Self> {
        if total_days == 0 {
            return Err(GanttError::InvalidWindow(
                "day window must span at least one day".to_owned(),
            ));
        }
        let end = start
            .add_days(i64::from(total_days) - 1)
            .ok_or_else(|| {
                GanttError::InvalidWindow(format!(
                    "day window of {total_days} days starting {start} overflows the calendar"
                ))
            })?;
        Ok(Self {
            mode: WindowMode::Days { total_days },
            start,
            end,
        })
    }

    /// Day window covering an inclusive range, e.g. a phase span.
    pub fn from_range(range: DateRange) -> GanttResult<Self> {
        let total_days = u32::try_from(range.day_count()).map_err(|_| {
            GanttError::InvalidWindow(format!(
                "range {}..={} is too long for a day window",
                range.start(),
                range.end()
            ))
        })?;
        Self::days(range.start(), total_days)
    }

    #[must_use]
    pub fn mode(self) -> WindowMode {
        self.mode
    }

    #[must_use]
    pub fn start(self) -> CalendarDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> CalendarDate {
        self.end
    }

    #[must_use]
    pub fn bounds(self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    #[must_use]
    pub fn column_count(self) -> u32 {
        match self.mode {
            WindowMode::Year { .. } => MONTHS_PER_YEAR,
            WindowMode::Days { total_days } => total_days,
        }
    }

    #[must_use]
    pub fn contains(self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Maps a date to its column.
    ///
    /// The result is always in `[0, column_count - 1]`. Dates outside the
    /// window snap to the nearest edge column; callers clamp ranges first
    /// and must not rely on this to hide disjoint data.
    #[must_use]
    pub fn date_to_column(self, date: CalendarDate) -> u32 {
        let last = self.column_count() - 1;
        if date < self.start {
            return 0;
        }
        if date > self.end {
            return last;
        }
        match self.mode {
            WindowMode::Year { .. } => date.month0().min(last),
            WindowMode::Days { .. } => {
                let offset = self.start.days_until(date).clamp(0, i64::from(last));
                offset as u32
            }
        }
    }

    /// Days covered by one column, or `None` past the last column.
    #[must_use]
    pub fn column_range(self, column: u32) -> Option<DateRange> {
        if column >= self.column_count() {
            return None;
        }
        match self.mode {
            WindowMode::Year { year } => {
                let month = column as i32 + 1;
                let first = CalendarDate::from_ymd_clamped(year, month, 1);
                // Day clamps to the month length.
                let last = CalendarDate::from_ymd_clamped(year, month, 31);
                Some(DateRange::new(first, last))
            }
            WindowMode::Days { .. } => self
                .start
                .add_days(i64::from(column))
                .map(DateRange::single_day),
        }
    }

    /// First day of a column, used for header labels.
    #[must_use]
    pub fn column_start_date(self, column: u32) -> Option<CalendarDate> {
        self.column_range(column).map(DateRange::start)
    }
}
