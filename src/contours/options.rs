use serde::{Deserialize, Serialize};

/// Thresholding rule applied to the inverted frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// `v > t → 255`, else 0.
    #[default]
    Binary,
    /// `v > t → v`, else 0.
    ToZero,
    /// Binary with the level chosen by Otsu's method; the configured value is
    /// ignored.
    Otsu,
}

/// Segmentation knobs for the contour extractor.
///
/// - `threshold`: cut-off on the inverted frame; higher keeps only darker blobs.
/// - `mode`: see [`ThresholdMode`].
/// - `max_blobs`: how many of the largest contours are kept.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    pub threshold: u8,
    pub mode: ThresholdMode,
    pub max_blobs: usize,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            threshold: 200,
            mode: ThresholdMode::Binary,
            max_blobs: crate::classify::BLOB_COUNT,
        }
    }
}

impl SegmentationParams {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}
