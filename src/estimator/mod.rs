//! Per-frame pose estimator.
//!
//! Overview
//! - Optionally crops the frame to a region of interest.
//! - Segments the inverted frame and keeps the three largest contours.
//! - Classifies the swim bladder as the blob outside the closest pair.
//! - Derives the body heading from swim bladder to eye midpoint, labels the
//!   eyes left/right from the heading sector, and resolves each eye's
//!   long-axis angle against the heading.
//!
//! Every frame is handled independently; [`FrameEstimator`] holds only
//! parameters, so one instance can serve many threads. Batches are mapped in
//! parallel and returned in frame order.
//!
//! Modules
//! - [`params`]: configuration consumed by the estimator and the batch tool.
//! - `pipeline`: the [`FrameEstimator`] implementation.

pub mod params;
mod pipeline;

pub use params::TrackerParams;
pub use pipeline::{estimate_pose, FrameEstimator};
