//! Blob boundary extraction from a grayscale frame.
//!
//! The eyes and swim bladder image as dark blobs on a brighter body, so the
//! frame is inverted (`255 − v`) before thresholding. The pipeline is:
//!
//! - Segmentation (`threshold`): inversion followed by a binary, to-zero or
//!   Otsu threshold. Any non-zero pixel of the result is foreground.
//! - Border following: every border of the foreground is traced, outer
//!   borders and hole borders alike (full hierarchy), and turned into a
//!   closed [`Contour`](crate::types::Contour) of pixel-centre points.
//! - Ranking: contours are ordered by enclosed polygon area, largest first,
//!   and truncated to the `max_blobs` largest. Equal areas are ordered last
//!   traced first.
//!
//! Notes
//! - Coordinates are in the pixel space of the frame handed in. When a region
//!   of interest is cropped beforehand, results are relative to its corner.
//! - Blobs touching each other merge into one border; an eye that fuses with
//!   the swim bladder therefore shows up as a wrong blob count downstream.

mod extract;
mod options;
mod threshold;

pub use extract::{extract_contours, find_all_contours};
pub use options::{SegmentationParams, ThresholdMode};
pub use threshold::{apply_threshold, invert, segment};
