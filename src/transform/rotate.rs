//! Rotation about the integer image centre with bilinear sampling.
//!
//! Each output pixel is mapped back into the source by converting its
//! raster position to polar form around the centre, subtracting the
//! rotation angle and converting back. The four integer neighbours of the
//! resulting fractional position are blended bilinearly.
//!
//! Two policies shape the output:
//! - if any of the four neighbours falls outside the source, the pixel keeps
//!   the background colour, which clips the corners of rotated content;
//! - the pixel sitting exactly on the integer centre is always background.
use crate::geometry::{
    cartesian_to_polar, cartesian_to_raster, degrees_to_radians, image_center,
    polar_to_cartesian, raster_to_cartesian,
};
use crate::image::{ImageView, Raster, Rgba8};
use crate::sampling::{bilinear_channels, Quad};
use nalgebra::Point2;

/// Rotate counter-clockwise by `angle_deg` degrees. Dimensions are kept.
pub fn rotate(image: &Raster, angle_deg: f64) -> Raster {
    let mut out = image.blank_like();
    if image.is_empty() {
        return out;
    }
    log::debug!(
        "rotate: {}x{} angle={angle_deg}",
        image.width(),
        image.height()
    );
    let center = image_center(image.width(), image.height());
    let radians = degrees_to_radians(angle_deg);
    let background = image.layout().background();
    out.fill_rows(|y, dst| {
        for (x, px) in dst.iter_mut().enumerate() {
            *px = source_position(x, y, center, radians)
                .and_then(|pos| sample(image, pos))
                .unwrap_or(background);
        }
    });
    out
}

/// Fractional source position for output pixel `(x, y)`, or `None` for the
/// centre pixel.
fn source_position(x: usize, y: usize, center: Point2<i64>, radians: f64) -> Option<Point2<f64>> {
    let cart = raster_to_cartesian(Point2::new(x as i64, y as i64), center);
    if cart.x == 0 && cart.y == 0 {
        return None;
    }
    let polar = cartesian_to_polar(cart).rotated_back(radians);
    Some(cartesian_to_raster(polar_to_cartesian(polar), center))
}

fn sample(image: &Raster, pos: Point2<f64>) -> Option<Rgba8> {
    if !pos.x.is_finite() || !pos.y.is_finite() {
        return None;
    }
    let (fx, fy) = (pos.x.floor(), pos.y.floor());
    let (x0, y0) = (fx as i64, fy as i64);
    let (x1, y1) = (pos.x.ceil() as i64, pos.y.ceil() as i64);
    let at = |x: i64, y: i64| image.checked(x, y).map(Rgba8::channels);
    let quad = Quad {
        top_left: at(x0, y0)?,
        top_right: at(x1, y0)?,
        bottom_left: at(x0, y1)?,
        bottom_right: at(x1, y1)?,
    };
    Some(Rgba8::from_channels(bilinear_channels(
        quad,
        pos.x - fx,
        pos.y - fy,
    )))
}
