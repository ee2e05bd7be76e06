use super::options::SegmentationParams;
use super::threshold::segment;
use crate::error::Result;
use crate::image::ImageU8;
use crate::types::Contour;
use image::GrayImage;
use imageproc::contours::find_contours;
use log::debug;
use nalgebra::Point2;

/// Traces every border of the non-zero pixels of `binary` and returns them
/// largest enclosed area first. Contours of equal area come out in reverse
/// tracing order (ascending stable sort, then reversed).
pub fn find_all_contours(binary: &GrayImage) -> Vec<Contour> {
    let mut contours: Vec<(f64, Contour)> = find_contours::<i32>(binary)
        .into_iter()
        .filter(|c| !c.points.is_empty())
        .map(|c| {
            let contour = Contour::new(
                c.points
                    .iter()
                    .map(|p| Point2::new(p.x as f64, p.y as f64))
                    .collect(),
            );
            (contour.area(), contour)
        })
        .collect();
    contours.sort_by(|a, b| a.0.total_cmp(&b.0));
    contours.into_iter().rev().map(|(_, c)| c).collect()
}

/// Segments `frame` and returns at most `params.max_blobs` contours, largest
/// first.
pub fn extract_contours(frame: ImageU8<'_>, params: &SegmentationParams) -> Result<Vec<Contour>> {
    frame.validate()?;
    let binary = segment(frame, params.threshold, params.mode);
    let mut contours = find_all_contours(&binary);
    let total = contours.len();
    contours.truncate(params.max_blobs);
    debug!(
        "extract_contours: {} borders traced, kept {} (areas: {:?})",
        total,
        contours.len(),
        contours.iter().map(|c| c.area()).collect::<Vec<_>>()
    );
    Ok(contours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contours::ThresholdMode;
    use crate::error::PoseError;
    use image::Luma;

    fn binary_with_rects(w: u32, h: u32, rects: &[(u32, u32, u32, u32)]) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| {
            let inside = rects
                .iter()
                .any(|&(x0, y0, rw, rh)| x >= x0 && x < x0 + rw && y >= y0 && y < y0 + rh);
            Luma([if inside { 255 } else { 0 }])
        })
    }

    #[test]
    fn contours_are_sorted_by_area() {
        let img = binary_with_rects(40, 40, &[(2, 2, 3, 3), (10, 10, 12, 8), (30, 2, 6, 6)]);
        let contours = find_all_contours(&img);
        assert_eq!(contours.len(), 3);
        let areas: Vec<f64> = contours.iter().map(|c| c.area()).collect();
        // traced through pixel centres: (w-1) * (h-1)
        assert_eq!(areas, vec![77.0, 25.0, 4.0]);
    }

    #[test]
    fn equal_areas_come_out_in_reverse_tracing_order() {
        // raster tracing meets the left square first
        let img = binary_with_rects(30, 10, &[(2, 2, 4, 4), (20, 2, 4, 4), (12, 3, 2, 2)]);
        let contours = find_all_contours(&img);
        let first_x: Vec<f64> = contours
            .iter()
            .map(|c| c.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min))
            .collect();
        assert_eq!(first_x, vec![20.0, 2.0, 12.0]);
    }

    #[test]
    fn single_pixel_blob_is_a_one_point_contour() {
        let img = binary_with_rects(8, 8, &[(3, 4, 1, 1)]);
        let contours = find_all_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points, vec![Point2::new(3.0, 4.0)]);
    }

    #[test]
    fn extraction_keeps_largest_dark_blobs() {
        let (w, h) = (48usize, 32usize);
        let mut frame = vec![230u8; w * h];
        for &(x0, y0, rw, rh) in &[(2, 2, 4, 4), (10, 10, 10, 10), (30, 5, 8, 6), (40, 25, 2, 2)] {
            for y in y0..y0 + rh {
                for x in x0..x0 + rw {
                    frame[y * w + x] = 15;
                }
            }
        }
        let params = SegmentationParams {
            threshold: 128,
            mode: ThresholdMode::Binary,
            max_blobs: 3,
        };
        let contours = extract_contours(ImageU8::packed(w, h, &frame), &params).unwrap();
        let areas: Vec<f64> = contours.iter().map(|c| c.area()).collect();
        assert_eq!(areas, vec![81.0, 35.0, 9.0]);
    }

    #[test]
    fn extraction_rejects_empty_frame() {
        let params = SegmentationParams::default();
        assert!(matches!(
            extract_contours(ImageU8::packed(0, 0, &[]), &params),
            Err(PoseError::EmptyImage { .. })
        ));
    }
}
