//! Geometric pose stages run on the classified blobs of one frame.
//!
//! - [`body`]: swim-bladder centroid, eye midpoint and body heading.
//! - [`sides`]: configurable heading-quadrant table labelling the eyes left/right.
//! - [`long_axis`]: eye long-axis angle with the 180° ambiguity resolved
//!   against the heading.
//!
//! All angles use the image counter-clockwise convention of [`crate::angle`].

pub mod body;
pub mod long_axis;
pub mod sides;

pub use body::{body_pose, BodyPose};
pub use long_axis::{disambiguate, long_axis_angle, principal_axis_angle, AxisCandidate};
pub use sides::{assign_sides, Axis, Extremum, Sector, SideAssignment, SideAssignmentTable, SideRule};
