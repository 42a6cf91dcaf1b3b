//! Month-grid computation and rendering for the roster schedule.
//!
//! Builds one row per calendar day of a target month, merging in
//! previously fetched content keyed by date.

pub mod grid;
pub mod month;
pub mod render;

pub use grid::{DayRow, MonthGrid};
pub use month::{DayNames, MonthRef};
pub use render::render_table;
