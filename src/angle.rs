//! Angle utilities shared by the pose stages.
//!
//! All angles follow the image counter-clockwise convention: the positive
//! direction rotates from +x towards −y (screen "up"), because image rows grow
//! downwards.

use nalgebra::{Point2, Vector2};
use std::f64::consts::TAU;

/// Wraps an angle into the range [0, 2π).
#[inline]
pub fn mod2pi(angle: f64) -> f64 {
    let norm = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if norm >= TAU {
        0.0
    } else {
        norm
    }
}

/// Shortest-arc distance between two directions, in [0, π].
///
/// Unlike an axis comparison, antipodal directions are π apart here.
#[inline]
pub fn abs_angle_diff(a: f64, b: f64) -> f64 {
    let diff = (mod2pi(a) - mod2pi(b)).abs();
    if TAU - diff < diff {
        TAU - diff
    } else {
        diff
    }
}

/// Direction of the vector `a → b`, image-CCW positive, in [0, 2π).
#[inline]
pub fn angle_ab(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let d = b - a;
    mod2pi((-d.y).atan2(d.x))
}

/// Unit vector in image coordinates pointing along `angle`.
#[inline]
pub fn angle_to_vector(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), -angle.sin())
}

/// True when `angle` (wrapped) lies in the half-open sector `[start, end)`.
#[inline]
pub(crate) fn in_sector(angle: f64, start: f64, end: f64) -> bool {
    let a = mod2pi(angle);
    start <= a && a < end
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mod2pi_wraps_into_range() {
        assert!(approx_eq(mod2pi(0.5), 0.5));
        assert!(approx_eq(mod2pi(-FRAC_PI_2), 3.0 * FRAC_PI_2));
        assert!(approx_eq(mod2pi(TAU), 0.0));
        assert!(approx_eq(mod2pi(5.0 * PI), PI));
        assert!(mod2pi(-1e-18) < TAU);
    }

    #[test]
    fn abs_angle_diff_is_symmetric_and_bounded() {
        let samples = [-7.0, -PI, -1.0, 0.0, 0.3, FRAC_PI_2, PI, 4.0, TAU, 11.0];
        for &a in &samples {
            assert!(approx_eq(abs_angle_diff(a, a), 0.0));
            for &b in &samples {
                let d = abs_angle_diff(a, b);
                assert!(approx_eq(d, abs_angle_diff(b, a)));
                assert!((0.0..=PI + 1e-12).contains(&d), "diff {d} out of range");
            }
        }
    }

    #[test]
    fn abs_angle_diff_handles_wrap() {
        assert!(approx_eq(abs_angle_diff(0.1, TAU - 0.1), 0.2));
        assert!(approx_eq(abs_angle_diff(0.0, PI), PI));
        assert!(approx_eq(abs_angle_diff(FRAC_PI_4, -FRAC_PI_4), FRAC_PI_2));
    }

    #[test]
    fn angle_ab_is_ccw_positive_in_image() {
        let o = Point2::new(0.0, 0.0);
        assert!(approx_eq(angle_ab(&o, &Point2::new(10.0, 0.0)), 0.0));
        // screen up is -y
        assert!(approx_eq(angle_ab(&o, &Point2::new(0.0, -3.0)), FRAC_PI_2));
        assert!(approx_eq(angle_ab(&o, &Point2::new(-2.0, 0.0)), PI));
        assert!(approx_eq(angle_ab(&o, &Point2::new(0.0, 4.0)), 3.0 * FRAC_PI_2));
    }

    #[test]
    fn angle_to_vector_matches_angle_ab() {
        let o = Point2::new(5.0, 5.0);
        for &a in &[0.0, 0.7, 2.0, 4.5] {
            let tip = o + angle_to_vector(a) * 3.0;
            assert!(approx_eq(angle_ab(&o, &tip), a));
        }
    }
}
