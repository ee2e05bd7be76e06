//! Static-background helpers for preprocessing frames before segmentation.
//!
//! - `max_intensity_projection`: per-pixel maximum over a frame sequence.
//! - `subtract_background`: `background − frame`, saturated to [0, 255].
//! - `flatten_background`: per-frame `255 − (background − frame)` over a
//!   sequence, with size mismatches reported per frame.

use super::io::GrayImageU8;
use super::{ImageU8, ImageView};
use crate::error::{PoseError, Result};

/// Per-pixel maximum over `frames`. All frames must share one size; returns
/// `Ok(None)` for an empty sequence.
pub fn max_intensity_projection(frames: &[ImageU8<'_>]) -> Result<Option<GrayImageU8>> {
    let Some(first) = frames.first() else {
        return Ok(None);
    };
    first.validate()?;
    let (w, h) = (first.w, first.h);
    let mut acc = first.to_packed();
    for frame in &frames[1..] {
        frame.validate()?;
        if (frame.w, frame.h) != (w, h) {
            return Err(PoseError::SizeMismatch {
                expected: (w, h),
                found: (frame.w, frame.h),
            });
        }
        for (dst_row, src_row) in acc.chunks_exact_mut(w).zip(frame.rows()) {
            for (dst, &src) in dst_row.iter_mut().zip(src_row) {
                *dst = (*dst).max(src);
            }
        }
    }
    Ok(Some(GrayImageU8::new(w, h, acc)))
}

/// Subtracts `frame` from `background`, clamping at zero.
pub fn subtract_background(frame: ImageU8<'_>, background: ImageU8<'_>) -> Result<GrayImageU8> {
    frame.validate()?;
    background.validate()?;
    if (frame.w, frame.h) != (background.w, background.h) {
        return Err(PoseError::SizeMismatch {
            expected: (background.w, background.h),
            found: (frame.w, frame.h),
        });
    }
    let mut out = Vec::with_capacity(frame.w * frame.h);
    for (f_row, bg_row) in frame.rows().zip(background.rows()) {
        out.extend(f_row.iter().zip(bg_row).map(|(&f, &bg)| bg.saturating_sub(f)));
    }
    Ok(GrayImageU8::new(frame.w, frame.h, out))
}

/// Removes the static background from every frame of a sequence.
///
/// The background is the max-intensity projection of the valid frames that
/// share the first valid frame's size. Each output frame is
/// `255 − (background − frame)`: the background turns white and dark blobs
/// stay dark. Frames of another size fail with
/// [`PoseError::SizeMismatch`], empty or truncated frames with
/// [`PoseError::EmptyImage`]; neither affects the other frames.
pub fn flatten_background(frames: &[ImageU8<'_>]) -> Vec<Result<GrayImageU8>> {
    let size = frames
        .iter()
        .find(|f| f.validate().is_ok())
        .map(|f| (f.w, f.h));
    let usable: Vec<ImageU8<'_>> = frames
        .iter()
        .copied()
        .filter(|f| f.validate().is_ok() && Some((f.w, f.h)) == size)
        .collect();
    let background = match max_intensity_projection(&usable) {
        Ok(bg) => bg,
        Err(err) => return frames.iter().map(|_| Err(err.clone())).collect(),
    };
    if usable.len() < frames.len() {
        log::warn!(
            "flatten_background: {} of {} frames excluded from the background",
            frames.len() - usable.len(),
            frames.len()
        );
    }

    frames
        .iter()
        .map(|frame| {
            frame.validate()?;
            let Some(bg) = &background else {
                // no valid frame at all; validate() above already failed
                return Err(PoseError::EmptyImage {
                    width: frame.w,
                    height: frame.h,
                    len: frame.data.len(),
                });
            };
            let diff = subtract_background(*frame, bg.as_view())?;
            let flat = diff.as_view().to_packed().into_iter().map(|v| 255 - v).collect();
            Ok(GrayImageU8::new(frame.w, frame.h, flat))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_brightest_pixel() {
        let a = [10u8, 200, 30, 40];
        let b = [50u8, 100, 30, 0];
        let frames = [ImageU8::packed(2, 2, &a), ImageU8::packed(2, 2, &b)];
        let bg = max_intensity_projection(&frames).unwrap().unwrap();
        assert_eq!(bg.as_view().to_packed(), vec![50, 200, 30, 40]);
    }

    #[test]
    fn projection_of_nothing_is_none() {
        assert!(max_intensity_projection(&[]).unwrap().is_none());
    }

    #[test]
    fn projection_rejects_mixed_sizes() {
        let a = [0u8; 4];
        let b = [0u8; 6];
        let frames = [ImageU8::packed(2, 2, &a), ImageU8::packed(3, 2, &b)];
        assert!(matches!(
            max_intensity_projection(&frames),
            Err(PoseError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn subtraction_saturates_at_zero() {
        let frame = [10u8, 250, 0, 128];
        let bg = [200u8, 200, 0, 255];
        let out =
            subtract_background(ImageU8::packed(2, 2, &frame), ImageU8::packed(2, 2, &bg)).unwrap();
        assert_eq!(out.as_view().to_packed(), vec![190, 0, 0, 127]);
    }

    #[test]
    fn flattening_whitens_background_and_keeps_dark_blobs() {
        let a = [200u8, 200, 50, 200];
        let b = [200u8, 60, 200, 200];
        let frames = [ImageU8::packed(2, 2, &a), ImageU8::packed(2, 2, &b)];
        let out = flatten_background(&frames);
        assert_eq!(out[0].as_ref().unwrap().as_view().to_packed(), vec![255, 255, 105, 255]);
        assert_eq!(out[1].as_ref().unwrap().as_view().to_packed(), vec![255, 115, 255, 255]);
    }

    #[test]
    fn odd_sized_frame_fails_alone() {
        let a = [100u8; 4];
        let odd = [0u8; 6];
        let b = [40u8, 100, 100, 100];
        let frames = [
            ImageU8::packed(2, 2, &a),
            ImageU8::packed(3, 2, &odd),
            ImageU8::packed(2, 2, &b),
            ImageU8::packed(0, 0, &[]),
        ];
        let out = flatten_background(&frames);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].as_ref().unwrap().as_view().to_packed(), vec![255; 4]);
        assert_eq!(
            out[1].as_ref().unwrap_err(),
            &PoseError::SizeMismatch {
                expected: (2, 2),
                found: (3, 2)
            }
        );
        assert_eq!(out[2].as_ref().unwrap().as_view().to_packed(), vec![195, 255, 255, 255]);
        assert!(matches!(out[3], Err(PoseError::EmptyImage { .. })));
    }

    #[test]
    fn flattening_nothing_is_empty() {
        assert!(flatten_background(&[]).is_empty());
    }
}
