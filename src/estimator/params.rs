//! Parameter types configuring the estimator stages.

use crate::contours::SegmentationParams;
use crate::image::Roi;
use crate::pose::SideAssignmentTable;
use serde::Deserialize;

/// Estimator-wide parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    /// Threshold, threshold mode and number of blobs kept.
    pub segmentation: SegmentationParams,
    /// Region cropped out of every frame before segmentation. Poses are
    /// reported in the cropped frame's coordinates.
    pub roi: Option<Roi>,
    /// Heading-sector → left-eye rule table; depends on the camera mount.
    pub sides: SideAssignmentTable,
}

impl TrackerParams {
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            segmentation: SegmentationParams::default().with_threshold(threshold),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contours::ThresholdMode;
    use crate::pose::{Axis, Extremum, SideRule};

    #[test]
    fn params_deserialize_with_defaults() {
        let json = r#"{
            "segmentation": {"threshold": 90, "mode": "otsu"},
            "roi": {"x1": 10, "y1": 20, "x2": 200, "y2": 180},
            "sides": {"right": {"axis": "y", "pick": "max"}}
        }"#;
        let params: TrackerParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.segmentation.threshold, 90);
        assert_eq!(params.segmentation.mode, ThresholdMode::Otsu);
        assert_eq!(params.segmentation.max_blobs, 3);
        assert_eq!(params.roi.map(|r| (r.x1, r.y2)), Some((10, 180)));
        assert_eq!(params.sides.right, SideRule::new(Axis::Y, Extremum::Max));
        assert_eq!(params.sides.up, SideRule::new(Axis::X, Extremum::Min));
    }

    #[test]
    fn empty_object_is_default() {
        let params: TrackerParams = serde_json::from_str("{}").unwrap();
        assert!(params.roi.is_none());
        assert_eq!(params.segmentation.threshold, 200);
    }
}
