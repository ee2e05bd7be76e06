//! Polygon moments up to second order.
//!
//! Raw moments are integrated over the region enclosed by the contour using
//! Green's theorem, one term per polygon edge. Orientation of the boundary
//! does not matter: clockwise input is flipped so that `m00` is the positive
//! enclosed area.
//!
//! Contours enclosing no area (a single point, two points, collinear runs)
//! have no usable second-order moments. They come back as
//! [`ShapeMoments::Degenerate`] carrying only a fallback centroid, so callers
//! cannot divide by a zero area by accident.

use crate::types::{Contour, Point2D};
use nalgebra::Point2;
use serde::Serialize;

/// Enclosed areas at or below this are treated as zero.
pub const AREA_EPSILON: f64 = f32::EPSILON as f64;

/// Raw (spatial) moments `m_pq = ∬ x^p y^q dA`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RawMoments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m20: f64,
    pub m11: f64,
    pub m02: f64,
}

/// Second-order moments about the centroid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CentralMoments {
    pub mu20: f64,
    pub mu11: f64,
    pub mu02: f64,
}

/// Moments of a contour with non-zero area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Moments {
    pub raw: RawMoments,
    pub central: CentralMoments,
}

impl Moments {
    pub fn centroid(&self) -> Point2D {
        Point2::new(self.raw.m10 / self.raw.m00, self.raw.m01 / self.raw.m00)
    }

    /// Central moments divided by the area (the covariance of the region).
    pub fn normalized_central(&self) -> CentralMoments {
        let m00 = self.raw.m00;
        CentralMoments {
            mu20: self.central.mu20 / m00,
            mu11: self.central.mu11 / m00,
            mu02: self.central.mu02 / m00,
        }
    }
}

/// Outcome of the moment computation for one contour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShapeMoments {
    Regular(Moments),
    /// Zero enclosed area: no moments beyond the fallback centroid.
    Degenerate { centroid: Point2D },
}

impl ShapeMoments {
    /// Enclosed area; exactly zero for degenerate contours.
    pub fn m00(&self) -> f64 {
        match self {
            ShapeMoments::Regular(m) => m.raw.m00,
            ShapeMoments::Degenerate { .. } => 0.0,
        }
    }

    pub fn centroid(&self) -> Point2D {
        match self {
            ShapeMoments::Regular(m) => m.centroid(),
            ShapeMoments::Degenerate { centroid } => *centroid,
        }
    }

    pub fn regular(&self) -> Option<&Moments> {
        match self {
            ShapeMoments::Regular(m) => Some(m),
            ShapeMoments::Degenerate { .. } => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, ShapeMoments::Degenerate { .. })
    }
}

/// Green's-theorem polygon moments. Returns `None` when the enclosed area is
/// zero (within [`AREA_EPSILON`]).
pub fn raw_moments(points: &[Point2D]) -> Option<RawMoments> {
    let last = points.last()?;
    let (mut xp, mut yp) = (last.x, last.y);
    let mut a = RawMoments::default();

    for p in points {
        let (x, y) = (p.x, p.y);
        let dxy = xp * y - x * yp;
        let xs = xp + x;
        let ys = yp + y;
        a.m00 += dxy;
        a.m10 += dxy * xs;
        a.m01 += dxy * ys;
        a.m20 += dxy * (xp * xs + x * x);
        a.m11 += dxy * (xp * (ys + yp) + x * (ys + y));
        a.m02 += dxy * (yp * ys + y * y);
        xp = x;
        yp = y;
    }

    if a.m00.abs() <= AREA_EPSILON {
        return None;
    }
    let sign = a.m00.signum();
    Some(RawMoments {
        m00: sign * a.m00 / 2.0,
        m10: sign * a.m10 / 6.0,
        m01: sign * a.m01 / 6.0,
        m20: sign * a.m20 / 12.0,
        m11: sign * a.m11 / 24.0,
        m02: sign * a.m02 / 12.0,
    })
}

/// Moments of `contour`, or its fallback centroid when it encloses no area.
///
/// An empty contour has no meaningful centroid and yields the origin;
/// [`estimate_pose`](crate::estimator::estimate_pose) rejects empty contours
/// before they get here.
pub fn moments(contour: &Contour) -> ShapeMoments {
    match raw_moments(&contour.points) {
        Some(raw) => {
            let cx = raw.m10 / raw.m00;
            let cy = raw.m01 / raw.m00;
            ShapeMoments::Regular(Moments {
                raw,
                central: CentralMoments {
                    mu20: raw.m20 - cx * raw.m10,
                    mu11: raw.m11 - cx * raw.m01,
                    mu02: raw.m02 - cy * raw.m01,
                },
            })
        }
        None => ShapeMoments::Degenerate {
            centroid: fallback_centroid(&contour.points),
        },
    }
}

/// Area-weighted centroid, or the mean of the listed points for zero-area
/// contours.
pub fn contour_centre(contour: &Contour) -> Point2D {
    moments(contour).centroid()
}

fn fallback_centroid(points: &[Point2D]) -> Point2D {
    match points {
        [] => Point2::origin(),
        [p] => *p,
        _ => {
            let n = points.len() as f64;
            let (sx, sy) = points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            Point2::new(sx / n, sy / n)
        }
    }
}
