use serde::{Deserialize, Serialize};

use crate::core::CalendarDate;

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display style for date labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLabelStyle {
    /// `2025-03-10`
    Iso,
    /// `Mar 10`
    Short,
    /// `Mar 10, 2025`
    #[default]
    Long,
    /// `Mar 2025`
    MonthYear,
}

#[must_use]
pub fn format_date_label(date: CalendarDate, style: DateLabelStyle) -> String {
    let pattern = match style {
        DateLabelStyle::Iso => "%Y-%m-%d",
        DateLabelStyle::Short => "%b %-d",
        DateLabelStyle::Long => "%b %-d, %Y",
        DateLabelStyle::MonthYear => "%b %Y",
    };
    date.as_naive().format(pattern).to_string()
}

/// Label for an optional record date, e.g. a task without a due date.
#[must_use]
pub fn format_optional_date(
    date: Option<CalendarDate>,
    style: DateLabelStyle,
    fallback: &str,
) -> String {
    date.map_or_else(|| fallback.to_owned(), |date| format_date_label(date, style))
}

/// Three-letter English month name for a zero-based month; `None` past 11.
#[must_use]
pub fn month_short_name(month0: u32) -> Option<&'static str> {
    MONTH_SHORT_NAMES.get(month0 as usize).copied()
}
