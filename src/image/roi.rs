use serde::Deserialize;

/// Rectangular region of interest with inclusive corners `(x1, y1)`–`(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Roi {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Roi {
    pub fn new(top_left: (usize, usize), bottom_right: (usize, usize)) -> Self {
        Self {
            x1: top_left.0,
            y1: top_left.1,
            x2: bottom_right.0,
            y2: bottom_right.1,
        }
    }

    /// Width in pixels (both corners included).
    pub fn width(&self) -> usize {
        (self.x2 + 1).saturating_sub(self.x1)
    }

    /// Height in pixels (both corners included).
    pub fn height(&self) -> usize {
        (self.y2 + 1).saturating_sub(self.y1)
    }

    /// Clamps the far corner to a `w × h` frame. Returns `None` when nothing of
    /// the region remains.
    pub fn clamp_to(&self, w: usize, h: usize) -> Option<Roi> {
        if w == 0 || h == 0 || self.x1 >= w || self.y1 >= h {
            return None;
        }
        if self.x2 < self.x1 || self.y2 < self.y1 {
            return None;
        }
        Some(Roi {
            x2: self.x2.min(w - 1),
            y2: self.y2.min(h - 1),
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_inclusive() {
        let roi = Roi::new((2, 3), (5, 3));
        assert_eq!(roi.width(), 4);
        assert_eq!(roi.height(), 1);
    }

    #[test]
    fn clamp_trims_far_corner() {
        let roi = Roi::new((2, 2), (100, 100));
        assert_eq!(roi.clamp_to(10, 8), Some(Roi::new((2, 2), (9, 7))));
    }

    #[test]
    fn clamp_rejects_outside_or_inverted() {
        assert_eq!(Roi::new((10, 0), (12, 3)).clamp_to(10, 10), None);
        assert_eq!(Roi::new((5, 5), (4, 8)).clamp_to(10, 10), None);
    }
}
