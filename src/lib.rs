//! gantt-rs: calendar projection engine for Gantt-style timelines.
//!
//! Date ranges from project, phase and task records are normalized to
//! calendar days, clamped to a visible window (a year of months or a span of
//! days) and mapped to inclusive column spans. The core is pure and
//! synchronous; `api` builds ready-to-draw views on top of it.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{PhaseTimeline, TimelineConfig, YearTimeline};
pub use error::{GanttError, GanttResult};
