use crate::angle::angle_ab;
use crate::types::Point2D;
use log::debug;
use nalgebra::center;
use serde::Serialize;

/// Body reference points and heading of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPose {
    pub swim_bladder: Point2D,
    pub eye_midpoint: Point2D,
    /// Direction swim bladder → eye midpoint, image-CCW positive, [0, 2π).
    pub heading: f64,
}

/// Heading from the swim-bladder centroid towards the midpoint of the eyes.
pub fn body_pose(swim_bladder: Point2D, eyes: [Point2D; 2]) -> BodyPose {
    let eye_midpoint = center(&eyes[0], &eyes[1]);
    let heading = angle_ab(&swim_bladder, &eye_midpoint);
    debug!(
        "body: sb=({:.1}, {:.1}) mp=({:.1}, {:.1}) heading={:.3}",
        swim_bladder.x, swim_bladder.y, eye_midpoint.x, eye_midpoint.y, heading
    );
    BodyPose {
        swim_bladder,
        eye_midpoint,
        heading,
    }
}
