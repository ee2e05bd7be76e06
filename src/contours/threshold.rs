use super::options::ThresholdMode;
use crate::image::{ImageU8, ImageView};
use image::{GrayImage, Luma};
use imageproc::contrast::otsu_level;

/// Photographic negative of the frame, as an owned image.
pub fn invert(frame: ImageU8<'_>) -> GrayImage {
    let mut out = frame.to_gray_image();
    for px in out.pixels_mut() {
        px[0] = 255 - px[0];
    }
    out
}

/// Thresholds `gray` in place and returns it.
pub fn apply_threshold(mut gray: GrayImage, value: u8, mode: ThresholdMode) -> GrayImage {
    let level = match mode {
        ThresholdMode::Otsu => otsu_level(&gray),
        ThresholdMode::Binary | ThresholdMode::ToZero => value,
    };
    for px in gray.pixels_mut() {
        let v = px[0];
        *px = match mode {
            ThresholdMode::ToZero if v > level => Luma([v]),
            _ if v > level => Luma([255]),
            _ => Luma([0]),
        };
    }
    gray
}

/// Inverts and thresholds a frame; dark blobs become foreground.
pub fn segment(frame: ImageU8<'_>, value: u8, mode: ThresholdMode) -> GrayImage {
    log::debug!(
        "segment: {}x{} threshold={} mode={:?}",
        frame.width(),
        frame.height(),
        value,
        mode
    );
    apply_threshold(invert(frame), value, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(img: &GrayImage) -> Vec<u8> {
        img.pixels().map(|p| p[0]).collect()
    }

    #[test]
    fn dark_pixels_become_foreground() {
        let data = [0u8, 40, 60, 255];
        let out = segment(ImageU8::packed(4, 1, &data), 200, ThresholdMode::Binary);
        // inverted: 255, 215, 195, 0
        assert_eq!(pixels(&out), vec![255, 255, 0, 0]);
    }

    #[test]
    fn to_zero_keeps_inverted_intensity() {
        let data = [0u8, 40, 60, 255];
        let out = segment(ImageU8::packed(4, 1, &data), 200, ThresholdMode::ToZero);
        assert_eq!(pixels(&out), vec![255, 215, 0, 0]);
    }

    #[test]
    fn otsu_splits_bimodal_frame() {
        let data: Vec<u8> = (0..64).map(|i| if i % 2 == 0 { 20 } else { 230 }).collect();
        let out = segment(ImageU8::packed(8, 8, &data), 0, ThresholdMode::Otsu);
        let fg = pixels(&out).iter().filter(|&&v| v == 255).count();
        assert_eq!(fg, 32);
        assert_eq!(out.get_pixel(0, 0)[0], 255);
    }
}
