//! Fixed per-pixel colour remaps.
use crate::image::{Raster, Rgba8};
use crate::sampling::clamp_channel;

const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Rec. 709 luma with every weighted term truncated before summing.
#[inline]
pub fn luma(px: Rgba8) -> u8 {
    let sum: u32 = LUMA_WEIGHTS
        .iter()
        .zip(px.rgb_channels())
        .map(|(w, c)| (w * c as f64) as u32)
        .sum();
    sum.min(255) as u8
}

/// Replace R, G and B with the pixel's luma.
pub fn grayscale(image: &Raster) -> Raster {
    image.map_pixels(|px| {
        let l = luma(px);
        px.with_rgb([l, l, l])
    })
}

/// Warm brown tint; each output channel is truncated and capped at 255.
pub fn sepia(image: &Raster) -> Raster {
    image.map_pixels(|px| {
        let src = px.rgb_channels();
        let out = SEPIA_MATRIX.map(|row| {
            let v: f64 = row.iter().zip(src).map(|(w, c)| w * c as f64).sum();
            clamp_channel(v as i64)
        });
        px.with_rgb(out)
    })
}

/// Invert R, G and B.
pub fn negative(image: &Raster) -> Raster {
    image.map_pixels(|px| px.with_rgb(px.rgb_channels().map(|c| 255 - c)))
}
