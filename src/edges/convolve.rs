//! 3×3 integer convolution over the colour channels of a raster.
use super::kernels::Kernel3;
use crate::image::{ImageView, Raster};

/// How taps that fall outside the image are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// Drop out-of-bounds taps; border pixels see a smaller window.
    Skip,
    /// Clamp tap coordinates to the nearest edge pixel.
    Replicate,
}

/// Weighted R, G, B sums of the 3×3 neighbourhood centred on `(x, y)`.
pub fn accumulate(image: &Raster, x: usize, y: usize, kernel: &Kernel3, border: Border) -> [i64; 3] {
    let mut acc = [0i64; 3];
    for (ky, kernel_row) in kernel.iter().enumerate() {
        let yy = y as isize + ky as isize - 1;
        for (kx, &weight) in kernel_row.iter().enumerate() {
            let xx = x as isize + kx as isize - 1;
            let tap = match border {
                Border::Skip => image.checked(xx as i64, yy as i64),
                Border::Replicate => Some(image.clamped(xx, yy)),
            };
            let Some(px) = tap else { continue };
            for (a, c) in acc.iter_mut().zip(px.rgb_channels()) {
                *a += weight as i64 * c as i64;
            }
        }
    }
    acc
}
