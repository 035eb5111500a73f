pub mod calendar_date;
pub mod color;
pub mod date_range;
pub mod format;
pub mod lane;
pub mod projection;
pub mod window;

pub use calendar_date::{CalendarDate, iso_to_calendar_date, parse_date_only};
pub use color::{ColorPalette, ColorToken, color_for_key};
pub use date_range::DateRange;
pub use format::{DateLabelStyle, format_date_label, format_optional_date, month_short_name};
pub use lane::Lane;
pub use projection::{
    PositionedBar, clamp_range_to_window, date_to_column, project_range, project_ranges,
};
pub use window::{VisibleWindow, WindowMode};
