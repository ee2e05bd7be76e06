#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod estimator;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod overlay;
pub mod types;

// Stage modules – public so tools and tests can run stages on their own.
pub mod angle;
pub mod classify;
pub mod contours;
pub mod moments;
pub mod pose;

// Tool configuration (JSON).
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: estimator + results.
pub use crate::estimator::{estimate_pose, FrameEstimator, TrackerParams};
pub use crate::types::{Contour, EyePose, EyeSide, FramePose, Point2D};

// Failure taxonomy and per-frame diagnostics.
pub use crate::diagnostics::FrameReport;
pub use crate::error::{PoseError, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use eye_tracker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![255u8; w * h];
/// let img = ImageU8::packed(w, h, &gray);
///
/// let estimator = FrameEstimator::new(TrackerParams::with_threshold(128));
/// match estimator.process(img) {
///     Ok(pose) => println!("heading={:.3}", pose.heading),
///     Err(err) => println!("no pose: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::pose::SideAssignmentTable;
    pub use crate::{FrameEstimator, FramePose, PoseError, TrackerParams};
}
