//! Structured per-frame diagnostics returned next to the pose.

use crate::pose::{BodyPose, Sector};
use crate::types::{FramePose, Point2D};
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the per-frame pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Role a blob was given by the classifier and side assigner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlobRole {
    SwimBladder,
    LeftEye,
    RightEye,
}

/// Shape summary of one of the three blobs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobSummary {
    /// Position in the area-ranked contour list.
    pub index: usize,
    pub role: BlobRole,
    pub points: usize,
    pub area: f64,
    pub centroid: Point2D,
    pub degenerate: bool,
}

/// Pose plus the intermediate results that produced it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub pose: FramePose,
    pub body: BodyPose,
    pub sector: Sector,
    pub blobs: Vec<BlobSummary>,
    pub timing: TimingBreakdown,
}

impl FrameReport {
    pub fn blob(&self, role: BlobRole) -> Option<&BlobSummary> {
        self.blobs.iter().find(|b| b.role == role)
    }
}
