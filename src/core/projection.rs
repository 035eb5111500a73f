use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CalendarDate, DateRange, VisibleWindow};

/// Inclusive, zero-based column span of a range inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionedBar {
    pub start_column: u32,
    pub end_column: u32,
}

impl PositionedBar {
    /// Number of columns covered; at least `1`.
    ///
    /// A hand-built bar with `end_column < start_column` counts as one column.
    #[must_use]
    pub fn span(self) -> u32 {
        self.end_column
            .saturating_sub(self.start_column)
            .saturating_add(1)
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.start_column <= other.end_column && other.start_column <= self.end_column
    }
}

/// Intersects `range` with the window bounds.
///
/// Returns `None` when the range lies entirely before or after the window.
/// A single-day range inside the window is kept as a single day.
#[must_use]
pub fn clamp_range_to_window(range: DateRange, window: VisibleWindow) -> Option<DateRange> {
    range.intersect(window.bounds())
}

/// Free-function form of [`VisibleWindow::date_to_column`].
#[must_use]
pub fn date_to_column(date: CalendarDate, window: VisibleWindow) -> u32 {
    window.date_to_column(date)
}

/// Projects a range onto window columns, or `None` when nothing is visible.
#[must_use]
pub fn project_range(range: DateRange, window: VisibleWindow) -> Option<PositionedBar> {
    let clamped = clamp_range_to_window(range, window)?;
    let start_column = window.date_to_column(clamped.start());
    let end_column = window.date_to_column(clamped.end()).max(start_column);
    Some(PositionedBar {
        start_column,
        end_column,
    })
}

/// Projects many ranges onto the same window, preserving input order.
///
/// The function is pure, so with `parallel-projection` the work is split
/// across the rayon pool without changing the result.
#[must_use]
pub fn project_ranges(ranges: &[DateRange], window: VisibleWindow) -> Vec<Option<PositionedBar>> {
    #[cfg(feature = "parallel-projection")]
    {
        ranges
            .par_iter()
            .map(|range| project_range(*range, window))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        ranges
            .iter()
            .map(|range| project_range(*range, window))
            .collect()
    }
}
