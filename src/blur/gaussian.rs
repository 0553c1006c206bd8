use super::box_blur::blur_into;
use crate::image::Raster;

/// Radii of the three box passes approximating a Gaussian for `intensity`.
pub fn box_radii(intensity: usize) -> [usize; 3] {
    let next = intensity.saturating_add(1);
    [intensity, next, next]
}

/// Gaussian blur approximated by three successive box blurs.
///
/// Each pass consumes the complete output of the previous one; the two
/// buffers swap roles between passes.
pub fn gaussian_blur(image: &Raster, intensity: usize) -> Raster {
    log::debug!(
        "gaussian_blur: {}x{} intensity={intensity} radii={:?}",
        image.width(),
        image.height(),
        box_radii(intensity)
    );
    let mut front = image.clone();
    let mut back = image.blank_like();
    for radius in box_radii(intensity) {
        blur_into(&front, &mut back, radius);
        std::mem::swap(&mut front, &mut back);
    }
    front
}
