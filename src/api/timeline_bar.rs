use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    ColorToken, DateRange, Lane, PositionedBar, VisibleWindow, format_date_label,
    format_optional_date, project_range,
};
use crate::error::GanttResult;
use crate::render::{BarGeometry, project_bar_geometry};

use super::TimelineConfig;

/// One visible bar with everything a view needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBar {
    pub id: String,
    pub label: String,
    /// Full record range, before clamping to the window.
    pub range: DateRange,
    pub bar: PositionedBar,
    pub lane: Lane,
    pub color: ColorToken,
    pub start_label: String,
    pub end_label: String,
    pub geometry: BarGeometry,
}

/// Record that has no usable dates, listed with a placeholder label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndatedRecord {
    pub id: String,
    pub label: String,
    pub date_label: String,
}

/// Record fields needed to place one bar.
#[derive(Debug, Clone, Copy)]
pub(super) struct BarSource<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub range: Option<DateRange>,
    pub lane: Lane,
}

/// Projects one record; `Ok(None)` when it has no dates or is off-window.
pub(super) fn place_bar(
    source: BarSource<'_>,
    window: VisibleWindow,
    config: &TimelineConfig,
) -> GanttResult<Option<TimelineBar>> {
    let Some(range) = source.range else {
        trace!(id = source.id, "record without usable dates skipped");
        return Ok(None);
    };
    let Some(bar) = project_range(range, window) else {
        trace!(
            id = source.id,
            start = %range.start(),
            end = %range.end(),
            "record outside visible window skipped"
        );
        return Ok(None);
    };

    let geometry =
        project_bar_geometry(bar, window.column_count(), source.lane, config.bar_layout)?;
    Ok(Some(TimelineBar {
        id: source.id.to_owned(),
        label: source.label.to_owned(),
        range,
        bar,
        lane: source.lane,
        color: config.palette.token_for(source.id).clone(),
        start_label: format_date_label(range.start(), config.date_label_style),
        end_label: format_date_label(range.end(), config.date_label_style),
        geometry,
    }))
}

/// Placeholder entry for a record without dates.
pub(super) fn undated_record(
    source: BarSource<'_>,
    config: &TimelineConfig,
) -> UndatedRecord {
    UndatedRecord {
        id: source.id.to_owned(),
        label: source.label.to_owned(),
        date_label: format_optional_date(
            None,
            config.date_label_style,
            &config.missing_date_label,
        ),
    }
}

/// Moves a bar to another lane and refreshes its geometry.
pub(super) fn relane_bar(
    bar: &mut TimelineBar,
    lane: Lane,
    column_count: u32,
    config: &TimelineConfig,
) -> GanttResult<()> {
    bar.lane = lane;
    bar.geometry = project_bar_geometry(bar.bar, column_count, lane, config.bar_layout)?;
    Ok(())
}
