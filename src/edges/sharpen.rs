use super::convolve::{accumulate, Border};
use super::kernels::sharpen_kernel;
use crate::image::{ImageView, Raster};
use crate::sampling::clamp_channel;

/// Intensities beyond this saturate every non-flat pixel anyway.
const MAX_INTENSITY: u32 = 1 << 16;

/// High-pass sharpen with the cross-shaped kernel of the given intensity.
///
/// Borders replicate edge pixels, so flat regions (including image edges)
/// are unchanged. Intensity 0 is the identity. Alpha is copied.
pub fn sharpen(image: &Raster, intensity: u32) -> Raster {
    log::debug!(
        "sharpen: {}x{} intensity={intensity}",
        image.width(),
        image.height()
    );
    let kernel = sharpen_kernel(intensity.min(MAX_INTENSITY) as i32);
    let mut out = image.blank_like();
    out.fill_rows(|y, dst| {
        let src = image.row(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let acc = accumulate(image, x, y, &kernel, Border::Replicate);
            *px = src[x].with_rgb(acc.map(clamp_channel));
        }
    });
    out
}
