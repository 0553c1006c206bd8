use crate::error::{FilterError, FilterResult};
use crate::image::{Raster, Rgba8};
use crate::sampling::{lerp, quantize_channel};
use serde::{Deserialize, Serialize};

/// Per-pixel ink coverage, row-major, `0` = none, `255` = full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl CoverageMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Host-side text renderer producing glyph coverage.
pub trait TextRasterizer {
    /// Render `text` into a mask no larger than `max_width × max_height`.
    fn rasterize(&self, text: &str, max_width: usize, max_height: usize) -> CoverageMask;
}

/// Placement and ink of a watermark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkOptions {
    /// Top-left corner of the mask in raster coordinates.
    pub origin: (usize, usize),
    pub color: Rgba8,
    /// Global opacity in `[0, 1]`, multiplied with per-pixel coverage.
    pub opacity: f32,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            color: Rgba8::WHITE,
            opacity: 0.5,
        }
    }
}

/// Blend `text`, rendered by `rasterizer`, over a copy of `image`.
///
/// Covered colour channels move towards the ink colour by
/// `coverage / 255 · opacity`; alpha is untouched. Mask pixels falling
/// outside the image are ignored.
pub fn watermark(
    image: &Raster,
    text: &str,
    rasterizer: &dyn TextRasterizer,
    options: &WatermarkOptions,
) -> FilterResult<Raster> {
    if !(0.0..=1.0).contains(&options.opacity) {
        return Err(FilterError::invalid(
            "opacity",
            options.opacity,
            "opacity must lie in [0, 1]",
        ));
    }
    let mut out = image.clone();
    let (ox, oy) = options.origin;
    if text.is_empty() || ox >= image.width() || oy >= image.height() {
        return Ok(out);
    }
    let mask = rasterizer.rasterize(text, image.width() - ox, image.height() - oy);
    if mask.data.len() != mask.width * mask.height {
        return Err(FilterError::mismatch(
            format!("{} coverage samples", mask.width * mask.height),
            format!("{} samples", mask.data.len()),
        ));
    }
    log::debug!(
        "watermark: {:?} mask={}x{} at ({ox},{oy})",
        text,
        mask.width,
        mask.height
    );
    let ink = options.color.rgb_channels();
    let opacity = options.opacity as f64;
    let rows = mask.height.min(image.height() - oy);
    let cols = mask.width.min(image.width() - ox);
    for my in 0..rows {
        for mx in 0..cols {
            let coverage = mask.get(mx, my);
            if coverage == 0 {
                continue;
            }
            let t = coverage as f64 / 255.0 * opacity;
            let (x, y) = (ox + mx, oy + my);
            let px = out.get(x, y);
            let mut rgb = px.rgb_channels();
            for (c, &k) in rgb.iter_mut().zip(ink.iter()) {
                *c = quantize_channel(lerp(*c as f64, t, k as f64));
            }
            out.set(x, y, px.with_rgb(rgb));
        }
    }
    Ok(out)
}
