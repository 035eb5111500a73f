use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CalendarDate;
use crate::error::{GanttError, GanttResult};

/// Inclusive span of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRepr")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Builds a range, collapsing an inverted input to a single day at `start`.
    ///
    /// Bad upstream records must not break a whole timeline, so an inverted
    /// range is never reordered and never rejected here. Use
    /// [`DateRange::try_new`] where the caller wants the error instead.
    #[must_use]
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        if start > end {
            debug!(%start, %end, "inverted date range collapsed to its start day");
            return Self::single_day(start);
        }
        Self { start, end }
    }

    /// Builds a range, rejecting `start > end`.
    pub fn try_new(start: CalendarDate, end: CalendarDate) -> GanttResult<Self> {
        if start > end {
            return Err(GanttError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn single_day(date: CalendarDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    #[must_use]
    pub fn start(self) -> CalendarDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> CalendarDate {
        self.end
    }

    /// Inclusive number of days covered; `1` for a single-day range.
    #[must_use]
    pub fn day_count(self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    #[must_use]
    pub fn contains(self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the overlapping days of both ranges, or `None` when disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        if self.end < other.start || self.start > other.end {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}

#[derive(Deserialize)]
struct DateRangeRepr {
    start: CalendarDate,
    end: CalendarDate,
}

impl TryFrom<DateRangeRepr> for DateRange {
    type Error = GanttError;

    fn try_from(value: DateRangeRepr) -> Result<Self, Self::Error> {
        Self::try_new(value.start, value.end)
    }
}
