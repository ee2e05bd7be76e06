//! Eye long-axis orientation from second-order central moments.
//!
//! The principal axis of the second-moment ellipse is an axis, not a
//! direction: `theta` and `theta + π` describe it equally well. The candidate
//! pointing closer to the body heading is reported.
//!
//! Known limitation: this assumes the long axis of each eye is roughly aligned
//! with the forward body axis. It is a shape orientation, not a measurement of
//! gaze direction, and an eye rotated more than a quarter turn away from the
//! heading will be reported flipped by π.

use crate::angle::{abs_angle_diff, mod2pi};
use crate::moments::{moments, CentralMoments, ShapeMoments};
use crate::types::Contour;
use log::{debug, warn};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};

/// One of the two directions along the principal axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "candidate", content = "angle", rename_all = "camelCase")]
pub enum AxisCandidate {
    /// The angle produced by the moment formula.
    Primary(f64),
    /// The primary angle turned by π.
    Antipodal(f64),
}

impl AxisCandidate {
    pub fn angle(self) -> f64 {
        match self {
            AxisCandidate::Primary(a) | AxisCandidate::Antipodal(a) => a,
        }
    }
}

/// Principal-axis angle of area-normalised central moments, image-CCW
/// positive, in (−π/4, 3π/4). Flipping the y axis turns `mu11` negative.
///
/// When `mu20 == mu02` the ratio is singular and the vertical axis (π/2) is
/// returned.
pub fn principal_axis_angle(central: &CentralMoments) -> f64 {
    let spread = central.mu20 - central.mu02;
    if spread == 0.0 {
        debug!(
            "long_axis: mu20 == mu02 ({:.4}), using vertical axis",
            central.mu20
        );
        return FRAC_PI_2;
    }
    let theta = 0.5 * (2.0 * -central.mu11 / spread).atan();
    if spread < 0.0 {
        theta + FRAC_PI_2
    } else {
        theta
    }
}

/// Picks the direction along the axis `theta` that lies on the shorter arc to
/// `heading`. The primary candidate wins exact ties.
pub fn disambiguate(theta: f64, heading: f64) -> AxisCandidate {
    let primary = mod2pi(theta);
    let antipodal = mod2pi(theta + PI);
    if abs_angle_diff(antipodal, heading) < abs_angle_diff(primary, heading) {
        AxisCandidate::Antipodal(antipodal)
    } else {
        AxisCandidate::Primary(primary)
    }
}

/// Long-axis angle from precomputed moments; `None` for zero-area shapes.
pub fn long_axis_from_moments(shape: &ShapeMoments, heading: f64) -> Option<f64> {
    let Some(m) = shape.regular() else {
        warn!("long_axis: degenerate eye contour, angle undefined");
        return None;
    };
    let theta = principal_axis_angle(&m.normalized_central());
    let choice = disambiguate(theta, heading);
    debug!("long_axis: theta={theta:.3} heading={heading:.3} -> {choice:?}");
    Some(choice.angle())
}

/// Long-axis angle of an eye contour in [0, 2π), or `None` when the contour is
/// too degenerate to have an axis (a single point or zero enclosed area).
pub fn long_axis_angle(contour: &Contour, heading: f64) -> Option<f64> {
    if contour.len() <= 1 {
        warn!("long_axis: single-point eye contour, angle undefined");
        return None;
    }
    long_axis_from_moments(&moments(contour), heading)
}
