use tracing::{debug, warn};

use crate::core::{DateLabelStyle, Lane, VisibleWindow, format_date_label};
use crate::error::{GanttError, GanttResult};
use crate::extensions::{assign_lanes, lane_count};
use crate::render::row_height_px;

use super::timeline_bar::{
    BarSource, TimelineBar, UndatedRecord, place_bar, relane_bar, undated_record,
};
use super::{PhaseRecord, TaskRecord, TimelineConfig};

/// Day-column view of the tasks of one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTimeline {
    phase_id: String,
    window: VisibleWindow,
    tasks: Vec<TimelineBar>,
    undated: Vec<UndatedRecord>,
    lane_count: u32,
    row_height_px: f64,
    skipped: usize,
}

impl PhaseTimeline {
    /// Builds the view over the phase's own inclusive date span.
    pub fn build(phase: &PhaseRecord, config: &TimelineConfig) -> GanttResult<Self> {
        let range = phase.date_range().ok_or_else(|| {
            GanttError::InvalidData(format!("phase `{}` has no usable date span", phase.id))
        })?;
        let window = VisibleWindow::from_range(range)?;
        Self::build_in_window(&phase.id, &phase.tasks, window, config)
    }

    /// Builds the view over an explicit window.
    ///
    /// Task lanes come from the records unless `config.auto_lanes` is set.
    /// Record lanes above [`Lane::MAX_CALLER`] are clamped to it.
    pub fn build_in_window(
        phase_id: &str,
        tasks: &[TaskRecord],
        window: VisibleWindow,
        config: &TimelineConfig,
    ) -> GanttResult<Self> {
        config.validate()?;
        let mut bars = Vec::with_capacity(tasks.len());
        let mut undated = Vec::new();
        let mut skipped = 0;

        for task in tasks {
            let source = BarSource {
                id: &task.id,
                label: &task.title,
                range: task.date_range(),
                lane: caller_lane(task),
            };
            if source.range.is_none() {
                undated.push(undated_record(source, config));
            }
            match place_bar(source, window, config)? {
                Some(bar) => bars.push(bar),
                None => skipped += 1,
            }
        }

        if config.auto_lanes {
            let positioned: Vec<_> = bars.iter().map(|bar| bar.bar).collect();
            for (bar, lane) in bars.iter_mut().zip(assign_lanes(&positioned)) {
                relane_bar(bar, lane, window.column_count(), config)?;
            }
        }

        let lanes: Vec<Lane> = bars.iter().map(|bar| bar.lane).collect();
        let lane_count = lane_count(&lanes);
        let row_height_px = row_height_px(lane_count, config.bar_layout)?;

        debug!(
            phase_id,
            tasks = bars.len(),
            skipped,
            lane_count,
            "phase timeline built"
        );
        Ok(Self {
            phase_id: phase_id.to_owned(),
            tasks: bars,
            undated,
            lane_count,
            row_height_px,
            skipped,
            window,
        })
    }

    #[must_use]
    pub fn phase_id(&self) -> &str {
        &self.phase_id
    }

    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    #[must_use]
    pub fn tasks(&self) -> &[TimelineBar] {
        &self.tasks
    }

    /// Tasks without dates, labelled with `config.missing_date_label`.
    #[must_use]
    pub fn undated(&self) -> &[UndatedRecord] {
        &self.undated
    }

    #[must_use]
    pub fn lane_count(&self) -> u32 {
        self.lane_count
    }

    /// Pixel height of the task row for the current lanes.
    #[must_use]
    pub fn row_height_px(&self) -> f64 {
        self.row_height_px
    }

    /// Tasks that produced no bar.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn task(&self, task_id: &str) -> Option<&TimelineBar> {
        self.tasks.iter().find(|bar| bar.id == task_id)
    }

    /// Day header labels, one per column.
    #[must_use]
    pub fn column_labels(&self, style: DateLabelStyle) -> Vec<String> {
        let window = self.window;
        (0..window.column_count())
            .filter_map(|column| window.column_start_date(column))
            .map(|date| format_date_label(date, style))
            .collect()
    }
}

fn caller_lane(task: &TaskRecord) -> Lane {
    let lane = task.lane.map(Lane).unwrap_or_default();
    if lane > Lane::MAX_CALLER {
        warn!(
            id = %task.id,
            lane = lane.index(),
            max = Lane::MAX_CALLER.index(),
            "task lane clamped"
        );
        return Lane::MAX_CALLER;
    }
    lane
}
