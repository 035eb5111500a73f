//! Timeline builders over upstream project records.
//!
//! Records come in as loosely-typed JSON; everything here degrades per
//! record (skip and count) so one malformed entry never fails a whole view.

mod phase_timeline;
mod records;
mod request_sequence;
mod timeline_bar;
mod timeline_config;
mod year_timeline;

pub use phase_timeline::PhaseTimeline;
pub use records::{PhaseRecord, ProjectRecord, TaskRecord, records_from_json_str};
pub use request_sequence::{RequestSequence, RequestTicket};
pub use timeline_bar::{TimelineBar, UndatedRecord};
pub use timeline_config::TimelineConfig;
pub use year_timeline::{ProjectRow, YearTimeline};
