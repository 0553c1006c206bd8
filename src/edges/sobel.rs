//! Sobel-style gradient magnitude per colour channel.
//!
//! - Convolves a 3×3 kernel pair with out-of-bounds taps skipped, so border
//!   pixels use a reduced window (no zero padding, no replication).
//! - Per channel, `mag = round(sqrt(gx^2 + gy^2))` clamped to `[0, 255]`.
//!
//! Both accumulators run the horizontal kernel. The vertical component
//! therefore duplicates the horizontal one and the magnitude is
//! `√2·|gx|`; horizontal intensity changes do not register.
use super::convolve::{accumulate, Border};
use super::kernels::{Kernel3, SOBEL_KERNEL_X};
use crate::image::{ImageView, Raster};
use crate::sampling::quantize_channel;

/// Edge map of `image`, same dimensions and layout. Alpha is copied.
pub fn detect_edges(image: &Raster) -> Raster {
    log::debug!("detect_edges: {}x{}", image.width(), image.height());
    gradient_magnitude(image, &SOBEL_KERNEL_X, &SOBEL_KERNEL_X)
}

fn gradient_magnitude(image: &Raster, kernel_x: &Kernel3, kernel_y: &Kernel3) -> Raster {
    let mut out = image.blank_like();
    out.fill_rows(|y, dst| {
        let src = image.row(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let gx = accumulate(image, x, y, kernel_x, Border::Skip);
            let gy = accumulate(image, x, y, kernel_y, Border::Skip);
            let mag: [u8; 3] = std::array::from_fn(|c| {
                let sq = gx[c] * gx[c] + gy[c] * gy[c];
                quantize_channel((sq as f64).sqrt())
            });
            *px = src[x].with_rgb(mag);
        }
    });
    out
}
