//! The board: fixed topology, mutable occupancy, and mill detection.
//!
//! The topology is shared read-only by the occupancy layer and the mill
//! detector. Only the rules engine writes occupancy.

pub mod topology;
pub mod state;
pub mod mill;

pub use topology::{PointId, Topology, POINT_COUNT};
pub use state::Board;
pub use mill::{all_in_mills, forms_mill, in_mill, is_protected, line_through, removable_pieces, Axis, MILL_LENGTH};
