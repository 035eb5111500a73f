//! Optional components kept out of the core projection path.

pub mod lanes;

pub use lanes::{assign_lanes, lane_count};
