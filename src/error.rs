use thiserror::Error;

use crate::core::CalendarDate;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid date range: start={start} is after end={end}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    #[error("invalid visible window: {0}")]
    InvalidWindow(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
