//! Coordinate mapping between raster, cartesian and polar frames.
//!
//! Raster coordinates have the origin at the top-left with y growing down.
//! The cartesian frame is centred on the integer image centre `(W/2, H/2)`
//! with y growing up, so counter-clockwise angles read naturally. Polar
//! coordinates are taken around that same centre.
use nalgebra::Point2;
use std::f64::consts::PI;

/// Point expressed in polar form around the image centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub radius: f64,
    /// Angle in radians, counter-clockwise from +x.
    pub theta: f64,
}

impl Polar {
    /// Same radius, angle reduced by `radians`.
    #[inline]
    pub fn rotated_back(self, radians: f64) -> Polar {
        Polar {
            radius: self.radius,
            theta: self.theta - radians,
        }
    }
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees * PI) / 180.0
}

/// Integer centre of a `width × height` raster (truncating division).
#[inline]
pub fn image_center(width: usize, height: usize) -> Point2<i64> {
    Point2::new((width / 2) as i64, (height / 2) as i64)
}

#[inline]
pub fn raster_to_cartesian(p: Point2<i64>, center: Point2<i64>) -> Point2<i64> {
    Point2::new(p.x - center.x, center.y - p.y)
}

/// Convert an integer cartesian point to polar form.
///
/// Points on the y axis get an explicit angle (`π/2` above the centre,
/// `3π/2` below, `π/2` at the origin) instead of relying on `atan2`'s
/// handling of a zero x component.
pub fn cartesian_to_polar(p: Point2<i64>) -> Polar {
    let radius = ((p.x * p.x + p.y * p.y) as f64).sqrt();
    let theta = if p.x == 0 {
        if p.y < 0 {
            1.5 * PI
        } else {
            0.5 * PI
        }
    } else {
        (p.y as f64).atan2(p.x as f64)
    };
    Polar { radius, theta }
}

#[inline]
pub fn polar_to_cartesian(p: Polar) -> Point2<f64> {
    Point2::new(p.radius * p.theta.cos(), p.radius * p.theta.sin())
}

#[inline]
pub fn cartesian_to_raster(p: Point2<f64>, center: Point2<i64>) -> Point2<f64> {
    Point2::new(p.x + center.x as f64, center.y as f64 - p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn center_truncates() {
        assert_eq!(image_center(5, 4), Point2::new(2, 2));
        assert_eq!(image_center(1, 1), Point2::new(0, 0));
    }

    #[test]
    fn raster_to_cartesian_flips_y() {
        let c = Point2::new(2, 2);
        assert_eq!(raster_to_cartesian(Point2::new(0, 0), c), Point2::new(-2, 2));
        assert_eq!(raster_to_cartesian(Point2::new(4, 3), c), Point2::new(2, -1));
    }

    #[test]
    fn polar_axis_convention() {
        let up = cartesian_to_polar(Point2::new(0, 3));
        assert!(approx_eq(up.radius, 3.0));
        assert!(approx_eq(up.theta, 0.5 * PI));

        let down = cartesian_to_polar(Point2::new(0, -3));
        assert!(approx_eq(down.theta, 1.5 * PI));

        let left = cartesian_to_polar(Point2::new(-2, 0));
        assert!(approx_eq(left.theta, PI));
    }

    #[test]
    fn polar_round_trip() {
        let c = Point2::new(3, 3);
        let p = raster_to_cartesian(Point2::new(5, 1), c);
        let back = cartesian_to_raster(polar_to_cartesian(cartesian_to_polar(p)), c);
        assert!(approx_eq(back.x, 5.0));
        assert!(approx_eq(back.y, 1.0));
    }

    #[test]
    fn degrees_convert() {
        assert!(approx_eq(degrees_to_radians(180.0), PI));
        assert!(approx_eq(degrees_to_radians(-90.0), -0.5 * PI));
    }
}
