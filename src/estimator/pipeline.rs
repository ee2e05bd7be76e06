use super::params::TrackerParams;
use crate::classify::{classify_centroids, BlobRoles};
use crate::contours::extract_contours;
use crate::diagnostics::{BlobRole, BlobSummary, FrameReport, TimingBreakdown};
use crate::error::{PoseError, Result};
use crate::image::{ImageU8, Roi};
use crate::moments::{moments, ShapeMoments};
use crate::pose::long_axis::long_axis_from_moments;
use crate::pose::{assign_sides, body_pose, BodyPose, SideAssignment, SideAssignmentTable};
use crate::types::{Contour, EyePose, FramePose, Point2D};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Stateless per-frame estimator: contours → classification → heading →
/// sides → eye long axes.
#[derive(Clone, Debug, Default)]
pub struct FrameEstimator {
    params: TrackerParams,
}

/// Intermediate results of the geometric stages for one frame.
struct PoseTrace {
    pose: FramePose,
    body: BodyPose,
    roles: BlobRoles,
    sides: SideAssignment,
    shapes: Vec<ShapeMoments>,
}

impl FrameEstimator {
    /// Create an estimator with the supplied parameters.
    pub fn new(params: TrackerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Estimate the pose of one grayscale frame.
    pub fn process(&self, frame: ImageU8<'_>) -> Result<FramePose> {
        let contours = self.extract(frame)?;
        self.process_contours(&contours)
    }

    /// Estimate the pose from three already-extracted blob boundaries.
    pub fn process_contours(&self, contours: &[Contour]) -> Result<FramePose> {
        estimate_pose(contours, &self.params.sides)
    }

    /// Run the full pipeline and capture per-stage timings and blob summaries.
    pub fn process_with_diagnostics(&self, frame: ImageU8<'_>) -> Result<FrameReport> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let start = Instant::now();
        let contours = self.extract(frame)?;
        timing.push("contours", elapsed_ms(start));

        let start = Instant::now();
        let trace = trace_pose(&contours, &self.params.sides)?;
        timing.push("pose", elapsed_ms(start));
        timing.total_ms = elapsed_ms(total_start);

        let role_of = |i: usize| {
            if i == trace.roles.swim_bladder {
                BlobRole::SwimBladder
            } else if i == trace.roles.eyes[trace.sides.left] {
                BlobRole::LeftEye
            } else {
                BlobRole::RightEye
            }
        };
        let blobs = contours
            .iter()
            .zip(&trace.shapes)
            .enumerate()
            .map(|(index, (contour, shape))| BlobSummary {
                index,
                role: role_of(index),
                points: contour.len(),
                area: shape.m00(),
                centroid: shape.centroid(),
                degenerate: shape.is_degenerate(),
            })
            .collect();

        Ok(FrameReport {
            pose: trace.pose,
            body: trace.body,
            sector: trace.sides.sector,
            blobs,
            timing,
        })
    }

    /// Estimate many frames in parallel. Results are in input order; a frame
    /// that fails does not affect the others.
    pub fn process_batch(&self, frames: &[ImageU8<'_>]) -> Vec<Result<FramePose>> {
        frames.par_iter().map(|&frame| self.process(frame)).collect()
    }

    /// Update the segmentation threshold.
    pub fn set_threshold(&mut self, threshold: u8) {
        self.params.segmentation.threshold = threshold;
    }

    /// Update or clear the region of interest.
    pub fn set_roi(&mut self, roi: Option<Roi>) {
        self.params.roi = roi;
    }

    /// Update the left/right rule table (e.g. for a different camera mount).
    pub fn set_side_table(&mut self, table: SideAssignmentTable) {
        self.params.sides = table;
    }

    fn extract(&self, frame: ImageU8<'_>) -> Result<Vec<Contour>> {
        let view = match &self.params.roi {
            Some(roi) => frame.crop(roi)?,
            None => frame,
        };
        extract_contours(view, &self.params.segmentation)
    }
}

/// Estimate the pose from exactly three blob boundaries.
///
/// Fails with [`PoseError::ShapeCount`] for any other count and with
/// [`PoseError::EmptyContour`] when a contour has no points. Degenerate eyes
/// still yield a pose, with that eye's angle set to `None`.
pub fn estimate_pose(contours: &[Contour], table: &SideAssignmentTable) -> Result<FramePose> {
    trace_pose(contours, table).map(|t| t.pose)
}

fn trace_pose(contours: &[Contour], table: &SideAssignmentTable) -> Result<PoseTrace> {
    if let Some(index) = contours.iter().position(Contour::is_empty) {
        return Err(PoseError::EmptyContour { index });
    }
    let shapes: Vec<ShapeMoments> = contours.iter().map(moments).collect();
    let centres: Vec<Point2D> = shapes.iter().map(ShapeMoments::centroid).collect();
    let roles = classify_centroids(&centres)?;

    let eye_centres = [centres[roles.eyes[0]], centres[roles.eyes[1]]];
    let body = body_pose(centres[roles.swim_bladder], eye_centres);
    let sides = assign_sides(body.heading, &eye_centres, table);

    let eye = |slot: usize| {
        let blob = roles.eyes[slot];
        EyePose {
            centre: centres[blob],
            angle: long_axis_from_moments(&shapes[blob], body.heading),
        }
    };
    let pose = FramePose {
        swim_bladder: body.swim_bladder,
        heading: body.heading,
        left_eye: eye(sides.left),
        right_eye: eye(sides.right),
    };
    debug!(
        "pose: heading={:.3} left={:?} right={:?}",
        pose.heading, pose.left_eye.angle, pose.right_eye.angle
    );

    Ok(PoseTrace {
        pose,
        body,
        roles,
        sides,
        shapes,
    })
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn disc(cx: f64, cy: f64, r: f64) -> Contour {
        let n = 64;
        Contour::new(
            (0..n)
                .map(|k| {
                    let t = k as f64 / n as f64 * std::f64::consts::TAU;
                    Point2::new(cx + r * t.cos(), cy + r * t.sin())
                })
                .collect(),
        )
    }

    #[test]
    fn heading_right_puts_upper_eye_on_the_left() {
        let contours = [disc(10.0, 5.0, 2.0), disc(0.0, 0.0, 3.0), disc(10.0, -5.0, 2.0)];
        let pose = estimate_pose(&contours, &SideAssignmentTable::default()).unwrap();
        assert!(pose.swim_bladder.coords.norm() < 1e-9);
        assert!(crate::angle::abs_angle_diff(pose.heading, 0.0) < 1e-9);
        assert!((pose.left_eye.centre - Point2::new(10.0, -5.0)).norm() < 1e-9);
        assert!((pose.right_eye.centre - Point2::new(10.0, 5.0)).norm() < 1e-9);
    }

    #[test]
    fn single_point_eye_keeps_pose_with_undefined_angle() {
        let contours = [
            disc(0.0, 0.0, 4.0),
            Contour::from_pixels([(12, -4)]),
            disc(12.0, 4.0, 2.0),
        ];
        let pose = estimate_pose(&contours, &SideAssignmentTable::default()).unwrap();
        assert_eq!(pose.left_eye.centre, Point2::new(12.0, -4.0));
        assert_eq!(pose.left_eye.angle, None);
        assert!(pose.right_eye.angle.is_some());
        assert!(matches!(
            pose.eye_angles(),
            Err(PoseError::AngleUndefined { .. })
        ));
    }

    #[test]
    fn empty_contour_is_rejected() {
        let contours = [disc(0.0, 0.0, 4.0), Contour::default(), disc(12.0, 4.0, 2.0)];
        let err = estimate_pose(&contours, &SideAssignmentTable::default()).unwrap_err();
        assert_eq!(err, PoseError::EmptyContour { index: 1 });
        assert!(err.is_no_pose());
    }

    #[test]
    fn two_blobs_is_no_pose() {
        let err = estimate_pose(
            &[disc(0.0, 0.0, 3.0), disc(8.0, 0.0, 2.0)],
            &SideAssignmentTable::default(),
        )
        .unwrap_err();
        assert!(err.is_no_pose());
        assert_eq!(
            err,
            PoseError::ShapeCount {
                expected: 3,
                found: 2
            }
        );
    }
}
