//! Swim-bladder identification among the three blobs of a frame.
//!
//! The eyes sit close together, so the pair of blobs with the shortest
//! centroid-to-centroid distance is taken to be the eyes and the remaining
//! blob is the swim bladder.

use crate::error::{PoseError, Result};
use crate::moments::contour_centre;
use crate::types::{Contour, Point2D};
use log::debug;
use nalgebra::distance;
use serde::Serialize;

/// Number of blobs expected per frame.
pub const BLOB_COUNT: usize = 3;

/// Pairs in the order they are compared; earlier pairs win ties.
const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Role assignment of the three blobs by input index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobRoles {
    pub swim_bladder: usize,
    /// Eye indices in ascending input order.
    pub eyes: [usize; 2],
}

/// Classifies blobs from their centroids.
pub fn classify_centroids(centres: &[Point2D]) -> Result<BlobRoles> {
    if centres.len() != BLOB_COUNT {
        return Err(PoseError::ShapeCount {
            expected: BLOB_COUNT,
            found: centres.len(),
        });
    }

    let mut best = PAIRS[0];
    let mut best_d = distance(&centres[best.0], &centres[best.1]);
    for &(i, j) in &PAIRS[1..] {
        let d = distance(&centres[i], &centres[j]);
        if d < best_d {
            best = (i, j);
            best_d = d;
        }
    }

    // indices sum to 0 + 1 + 2
    let swim_bladder = 3 - best.0 - best.1;
    debug!(
        "classify: eyes=({}, {}) d={:.2} swim_bladder={}",
        best.0, best.1, best_d, swim_bladder
    );
    Ok(BlobRoles {
        swim_bladder,
        eyes: [best.0, best.1],
    })
}

/// Index of the swim-bladder contour among exactly three contours.
pub fn find_swim_bladder(contours: &[Contour]) -> Result<usize> {
    let centres: Vec<Point2D> = contours.iter().map(contour_centre).collect();
    classify_centroids(&centres).map(|roles| roles.swim_bladder)
}
