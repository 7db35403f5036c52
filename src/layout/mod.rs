//! Row and lane layout: which lane each event occupies and where each row
//! sits, independent of any drawing surface.

pub mod coords;
pub mod lanes;
pub mod rows;

pub use coords::CoordinateMapper;
pub use lanes::{assign_lanes, LaneAssignment, Placement};
pub use rows::{layout_rows, row_height, ResourceRow, RowEvent, RowLayout};
