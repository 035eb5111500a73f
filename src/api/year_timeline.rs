use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Lane, VisibleWindow, month_short_name};
use crate::error::GanttResult;
use crate::extensions::assign_lanes;

use super::timeline_bar::{
    BarSource, TimelineBar, UndatedRecord, place_bar, relane_bar, undated_record,
};
use super::{ProjectRecord, TimelineConfig};

/// One project row of the yearly overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub project: TimelineBar,
    /// Phases of the project that are visible in the same year.
    pub phases: Vec<TimelineBar>,
}

/// Month-column overview of projects for one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTimeline {
    window: VisibleWindow,
    rows: IndexMap<String, ProjectRow>,
    undated: Vec<UndatedRecord>,
    skipped: usize,
}

impl YearTimeline {
    /// Builds rows for every project visible in `year`, in input order.
    ///
    /// Projects without dates, outside the year, or repeating an earlier id
    /// are skipped and counted, never reported as errors.
    pub fn build(
        projects: &[ProjectRecord],
        year: i32,
        config: &TimelineConfig,
    ) -> GanttResult<Self> {
        config.validate()?;
        let window = VisibleWindow::year(year);
        let mut rows = IndexMap::with_capacity(projects.len());
        let mut undated = Vec::new();
        let mut skipped = 0;

        for project in projects {
            let source = BarSource {
                id: &project.id,
                label: &project.name,
                range: project.date_range(),
                lane: Lane::FIRST,
            };
            if source.range.is_none() {
                undated.push(undated_record(source, config));
            }
            let Some(bar) = place_bar(source, window, config)? else {
                skipped += 1;
                continue;
            };

            match rows.entry(project.id.clone()) {
                Entry::Occupied(_) => {
                    warn!(id = %project.id, "duplicate project id skipped");
                    skipped += 1;
                }
                Entry::Vacant(slot) => {
                    let phases = Self::phase_bars(project, window, config)?;
                    slot.insert(ProjectRow {
                        project: bar,
                        phases,
                    });
                }
            }
        }

        debug!(
            year = window.start().year(),
            rows = rows.len(),
            skipped,
            "year timeline built"
        );
        Ok(Self {
            window,
            rows,
            undated,
            skipped,
        })
    }

    fn phase_bars(
        project: &ProjectRecord,
        window: VisibleWindow,
        config: &TimelineConfig,
    ) -> GanttResult<Vec<TimelineBar>> {
        let mut phases = Vec::with_capacity(project.phases.len());
        for phase in &project.phases {
            let source = BarSource {
                id: &phase.id,
                label: &phase.name,
                range: phase.date_range(),
                lane: Lane::FIRST,
            };
            if let Some(bar) = place_bar(source, window, config)? {
                phases.push(bar);
            }
        }

        if config.auto_lanes {
            let positioned: Vec<_> = phases.iter().map(|phase| phase.bar).collect();
            for (phase, lane) in phases.iter_mut().zip(assign_lanes(&positioned)) {
                relane_bar(phase, lane, window.column_count(), config)?;
            }
        }
        Ok(phases)
    }

    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    #[must_use]
    pub fn rows(&self) -> &IndexMap<String, ProjectRow> {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, project_id: &str) -> Option<&ProjectRow> {
        self.rows.get(project_id)
    }

    /// Projects without dates, labelled with `config.missing_date_label`.
    #[must_use]
    pub fn undated(&self) -> &[UndatedRecord] {
        &self.undated
    }

    /// Projects that produced no row.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Month header labels, `Jan` through `Dec`.
    #[must_use]
    pub fn column_labels(&self) -> Vec<&'static str> {
        (0..self.window.column_count())
            .filter_map(month_short_name)
            .collect()
    }
}
