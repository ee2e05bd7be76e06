//! Error types for per-frame pose estimation.
//!
//! Only hard failures live here. Soft degeneracies (zero-area blobs, singular
//! second moments) are handled where they occur and surface as `None` angles
//! on an otherwise valid [`FramePose`](crate::types::FramePose).

use crate::types::EyeSide;
use thiserror::Error;

/// Result alias for pose estimation.
pub type Result<T> = std::result::Result<T, PoseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    /// Segmentation did not yield the expected number of blobs; the frame has
    /// no pose.
    #[error("expected {expected} blobs, found {found}")]
    ShapeCount { expected: usize, found: usize },

    /// A contour passed to the estimator has no points.
    #[error("contour {index} has no points")]
    EmptyContour { index: usize },

    /// The pose exists but the named eye is too degenerate to have an axis.
    #[error("{side} eye angle is undefined (degenerate contour)")]
    AngleUndefined { side: EyeSide },

    /// Region of interest is empty or lies outside the frame.
    #[error("invalid region of interest ({x1}, {y1})-({x2}, {y2}) for {width}x{height} frame")]
    InvalidRoi {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        width: usize,
        height: usize,
    },

    /// Frames that must share a size do not.
    #[error("frame size {found:?} does not match {expected:?}")]
    SizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Frame buffer has no pixels or is shorter than its declared size.
    #[error("empty or truncated frame ({width}x{height}, {len} bytes)")]
    EmptyImage {
        width: usize,
        height: usize,
        len: usize,
    },
}

impl PoseError {
    /// True when the frame produced no pose at all, as opposed to a pose with
    /// an undefined eye angle.
    pub fn is_no_pose(&self) -> bool {
        !matches!(self, PoseError::AngleUndefined { .. })
    }
}
