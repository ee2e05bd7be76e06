//! Rendering of pose annotations for visual inspection.
//!
//! - `draw_pose`: RGB copy of the frame with, for each eye, a line along its
//!   long axis and a filled marker on its centroid.
//! - `draw_contours`: grayscale copy of the frame with blob outlines, used to
//!   preview a threshold.

use crate::angle::angle_to_vector;
use crate::image::ImageU8;
use crate::types::{Contour, EyePose, FramePose};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use serde::Deserialize;

/// Colours and sizes of the pose overlay.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Length of the long-axis line in pixels.
    pub axis_length: f32,
    pub marker_radius: i32,
    pub left_colour: [u8; 3],
    pub right_colour: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            axis_length: 50.0,
            marker_radius: 3,
            left_colour: [0, 0, 255],
            right_colour: [0, 255, 0],
        }
    }
}

/// Draws both eyes of `pose` onto an RGB copy of `frame`. An eye whose angle
/// is undefined gets its marker only.
pub fn draw_pose(frame: ImageU8<'_>, pose: &FramePose, style: &OverlayStyle) -> RgbImage {
    let mut canvas = DynamicImage::ImageLuma8(frame.to_gray_image()).to_rgb8();
    draw_eye(&mut canvas, &pose.left_eye, style, Rgb(style.left_colour));
    draw_eye(&mut canvas, &pose.right_eye, style, Rgb(style.right_colour));
    canvas
}

fn draw_eye(canvas: &mut RgbImage, eye: &EyePose, style: &OverlayStyle, colour: Rgb<u8>) {
    let start = (eye.centre.x.round() as f32, eye.centre.y.round() as f32);
    if let Some(angle) = eye.angle {
        let v = angle_to_vector(angle) * style.axis_length as f64;
        let end = (
            (eye.centre.x + v.x).round() as f32,
            (eye.centre.y + v.y).round() as f32,
        );
        draw_line_segment_mut(canvas, start, end, colour);
    }
    draw_filled_circle_mut(
        canvas,
        (start.0 as i32, start.1 as i32),
        style.marker_radius,
        colour,
    );
}

/// Outlines every contour at gray level `value` on a copy of `frame`.
pub fn draw_contours(frame: ImageU8<'_>, contours: &[Contour], value: u8) -> GrayImage {
    let mut canvas = frame.to_gray_image();
    for contour in contours {
        let n = contour.points.len();
        for i in 0..n {
            let p = contour.points[i];
            let q = contour.points[(i + 1) % n];
            draw_line_segment_mut(
                &mut canvas,
                (p.x as f32, p.y as f32),
                (q.x as f32, q.y as f32),
                Luma([value]),
            );
        }
    }
    canvas
}
