use serde::{Deserialize, Serialize};

use crate::core::{Lane, PositionedBar};
use crate::error::{GanttError, GanttResult};

/// Vertical layout of bar lanes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutConfig {
    pub lane_height_px: f64,
    pub lane_gap_px: f64,
    pub bar_inset_px: f64,
}

impl Default for BarLayoutConfig {
    fn default() -> Self {
        Self {
            lane_height_px: 28.0,
            lane_gap_px: 4.0,
            bar_inset_px: 3.0,
        }
    }
}

impl BarLayoutConfig {
    pub fn validate(self) -> GanttResult<Self> {
        for (value, name) in [
            (self.lane_height_px, "lane_height_px"),
            (self.lane_gap_px, "lane_gap_px"),
            (self.bar_inset_px, "bar_inset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GanttError::InvalidData(format!(
                    "bar layout `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.lane_height_px <= 2.0 * self.bar_inset_px {
            return Err(GanttError::InvalidData(
                "bar layout `lane_height_px` must exceed twice `bar_inset_px`".to_owned(),
            ));
        }
        Ok(self)
    }

    fn lane_step(self) -> f64 {
        self.lane_height_px + self.lane_gap_px
    }
}

/// Placement of one bar: horizontal in percent of the window width,
/// vertical in pixels from the top of the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_pct: f64,
    pub width_pct: f64,
    pub top_px: f64,
    pub height_px: f64,
}

/// Converts a projected bar into render geometry.
pub fn project_bar_geometry(
    bar: PositionedBar,
    column_count: u32,
    lane: Lane,
    config: BarLayoutConfig,
) -> GanttResult<BarGeometry> {
    let config = config.validate()?;
    if column_count == 0 {
        return Err(GanttError::InvalidData(
            "column count must be > 0".to_owned(),
        ));
    }
    if bar.end_column < bar.start_column || bar.end_column >= column_count {
        return Err(GanttError::InvalidData(format!(
            "bar columns {}..={} do not fit {column_count} columns",
            bar.start_column, bar.end_column
        )));
    }

    let columns = f64::from(column_count);
    Ok(BarGeometry {
        left_pct: f64::from(bar.start_column) / columns * 100.0,
        width_pct: f64::from(bar.span()) / columns * 100.0,
        top_px: f64::from(lane.index()) * config.lane_step() + config.bar_inset_px,
        height_px: config.lane_height_px - 2.0 * config.bar_inset_px,
    })
}

/// Total row height needed for `lane_count` lanes; no trailing gap.
pub fn row_height_px(lane_count: u32, config: BarLayoutConfig) -> GanttResult<f64> {
    let config = config.validate()?;
    if lane_count == 0 {
        return Ok(0.0);
    }
    Ok(f64::from(lane_count) * config.lane_step() - config.lane_gap_px)
}
