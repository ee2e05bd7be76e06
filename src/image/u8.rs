use super::roi::Roi;
use super::traits::ImageView;
use crate::error::{PoseError, Result};
use image::GrayImage;

/// Borrowed 8-bit grayscale frame with an explicit row stride.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Checks that the buffer is non-empty and long enough for `w × h` at the
    /// declared stride.
    pub fn validate(&self) -> Result<()> {
        let needed = if self.h == 0 {
            0
        } else {
            (self.h - 1) * self.stride + self.w
        };
        if self.w == 0 || self.h == 0 || self.stride < self.w || self.data.len() < needed {
            return Err(PoseError::EmptyImage {
                width: self.w,
                height: self.h,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Zero-copy sub-view of the region; the far corner is clamped to the
    /// frame.
    pub fn crop(&self, roi: &Roi) -> Result<ImageU8<'a>> {
        self.validate()?;
        let clamped = roi.clamp_to(self.w, self.h).ok_or(PoseError::InvalidRoi {
            x1: roi.x1,
            y1: roi.y1,
            x2: roi.x2,
            y2: roi.y2,
            width: self.w,
            height: self.h,
        })?;
        let start = clamped.y1 * self.stride + clamped.x1;
        Ok(ImageU8 {
            w: clamped.width(),
            h: clamped.height(),
            stride: self.stride,
            data: &self.data[start..],
        })
    }

    /// Owned `image` buffer with the visible pixels.
    pub fn to_gray_image(&self) -> GrayImage {
        // to_packed yields exactly w*h bytes, so from_raw cannot fail
        GrayImage::from_raw(self.w as u32, self.h as u32, self.to_packed())
            .unwrap_or_else(|| GrayImage::new(self.w as u32, self.h as u32))
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> Vec<u8> {
        (0..w * h).map(|i| i as u8).collect()
    }

    #[test]
    fn crop_is_inclusive_and_shares_stride() {
        let data = ramp(8, 6);
        let img = ImageU8::packed(8, 6, &data);
        let sub = img.crop(&Roi::new((2, 1), (4, 3))).unwrap();
        assert_eq!((sub.w, sub.h, sub.stride), (3, 3, 8));
        assert_eq!(sub.get(0, 0), img.get(2, 1));
        assert_eq!(sub.get(2, 2), img.get(4, 3));
        assert_eq!(sub.to_packed(), vec![10, 11, 12, 18, 19, 20, 26, 27, 28]);
    }

    #[test]
    fn crop_rejects_region_outside_frame() {
        let data = ramp(4, 4);
        let img = ImageU8::packed(4, 4, &data);
        assert!(matches!(
            img.crop(&Roi::new((4, 0), (6, 2))),
            Err(PoseError::InvalidRoi { .. })
        ));
    }

    #[test]
    fn validate_rejects_short_buffer() {
        let data = vec![0u8; 10];
        let img = ImageU8::packed(4, 4, &data);
        assert!(matches!(img.validate(), Err(PoseError::EmptyImage { .. })));
    }

    #[test]
    fn gray_image_round_trips_pixels() {
        let data = ramp(5, 2);
        let img = ImageU8::packed(5, 2, &data);
        let gray = img.to_gray_image();
        assert_eq!(gray.get_pixel(3, 1)[0], img.get(3, 1));
    }
}
