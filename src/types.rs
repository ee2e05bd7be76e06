use nalgebra::Point2;
use serde::Serialize;

/// Pixel-space point; x to the right, y downwards.
pub type Point2D = Point2<f64>;

/// Closed boundary polygon of one segmented blob.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Contour {
    pub points: Vec<Point2D>,
}

impl Contour {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Builds a contour from integer pixel coordinates.
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self {
            points: pixels
                .into_iter()
                .map(|(x, y)| Point2::new(x as f64, y as f64))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Absolute enclosed area (shoelace formula).
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let p = &self.points[i];
                let q = &self.points[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice.abs()
    }
}

/// Which side of the body an eye sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeSide {
    Left,
    Right,
}

impl std::fmt::Display for EyeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EyeSide::Left => f.write_str("left"),
            EyeSide::Right => f.write_str("right"),
        }
    }
}

/// Centroid and long-axis orientation of one eye.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EyePose {
    pub centre: Point2D,
    /// Long-axis angle in [0, 2π); `None` when the blob is too degenerate to
    /// have an axis.
    pub angle: Option<f64>,
}

/// Per-frame estimate of swim bladder, heading and both eyes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePose {
    pub swim_bladder: Point2D,
    /// Body heading (swim bladder → eye midpoint), image-CCW positive, [0, 2π).
    pub heading: f64,
    pub left_eye: EyePose,
    pub right_eye: EyePose,
}

impl FramePose {
    pub fn eye(&self, side: EyeSide) -> &EyePose {
        match side {
            EyeSide::Left => &self.left_eye,
            EyeSide::Right => &self.right_eye,
        }
    }

    /// True when both eye angles are defined.
    pub fn is_complete(&self) -> bool {
        self.left_eye.angle.is_some() && self.right_eye.angle.is_some()
    }

    /// Returns `(left, right)` eye angles, or the first side whose angle is
    /// undefined.
    pub fn eye_angles(&self) -> crate::error::Result<(f64, f64)> {
        let left = self
            .left_eye
            .angle
            .ok_or(crate::error::PoseError::AngleUndefined {
                side: EyeSide::Left,
            })?;
        let right = self
            .right_eye
            .angle
            .ok_or(crate::error::PoseError::AngleUndefined {
                side: EyeSide::Right,
            })?;
        Ok((left, right))
    }
}
