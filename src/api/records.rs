use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::{CalendarDate, DateRange};
use crate::error::{GanttError, GanttResult};

/// Project as returned by the upstream REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub phases: Vec<PhaseRecord>,
}

impl ProjectRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date: None,
            end_date: None,
            phases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    #[must_use]
    pub fn with_phase(mut self, phase: PhaseRecord) -> Self {
        self.phases.push(phase);
        self
    }

    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        record_range(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl PhaseRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date: None,
            end_date: None,
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: TaskRecord) -> Self {
        self.tasks.push(task);
        self
    }

    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        record_range(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// Task inside a phase. Tasks end on their due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Lane chosen by the caller; `None` means lane 0.
    #[serde(default)]
    pub lane: Option<u32>,
}

impl TaskRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_date: None,
            due_date: None,
            lane: None,
        }
    }

    #[must_use]
    pub fn with_dates(mut self, start: impl Into<String>, due: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.due_date = Some(due.into());
        self
    }

    #[must_use]
    pub fn with_lane(mut self, lane: u32) -> Self {
        self.lane = Some(lane);
        self
    }

    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        record_range(self.start_date.as_deref(), self.due_date.as_deref())
    }
}

/// Parses a JSON array of projects.
pub fn records_from_json_str(input: &str) -> GanttResult<Vec<ProjectRecord>> {
    serde_json::from_str(input)
        .map_err(|e| GanttError::InvalidData(format!("failed to parse project records: {e}")))
}

/// Range of a record from its optional start and end fields.
///
/// A record with only one usable date becomes a single-day range on that
/// date; a record with neither has no range.
fn record_range(start: Option<&str>, end: Option<&str>) -> Option<DateRange> {
    let start = start.and_then(CalendarDate::from_api_str);
    let end = end.and_then(CalendarDate::from_api_str);
    match (start, end) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)),
        (Some(date), None) | (None, Some(date)) => Some(DateRange::single_day(date)),
        (None, None) => None,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(value),
        Value::Number(value) => Ok(value.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "record id must be a string or number, got {other}"
        ))),
    }
}
