//! Presentational geometry for projected bars.
//!
//! Everything here consumes `PositionedBar` values and produces numbers a
//! drawing layer can use directly; no projection logic lives here.

mod bar_geometry;

pub use bar_geometry::{BarGeometry, BarLayoutConfig, project_bar_geometry, row_height_px};
