#![doc = include_str!("../README.md")]

// Data model, errors and the host-facing chain runner.
pub mod error;
pub mod image;
pub mod pipeline;

// Filter families.
pub mod blur;
pub mod edges;
pub mod overlay;
pub mod quantize;
pub mod tone;
pub mod transform;

// Building blocks shared by the filters.
pub mod geometry;
pub mod sampling;

// Tooling support.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{FilterError, FilterResult};
pub use crate::image::{PixelLayout, Raster, Rgba8};

// Every filter entry point, flat.
pub use crate::blur::{box_blur, box_blur_into, gaussian_blur};
pub use crate::edges::{detect_edges, sharpen};
pub use crate::overlay::{watermark, CoverageMask, TextRasterizer, WatermarkOptions};
pub use crate::quantize::{pixelate, posterize};
pub use crate::tone::{brighten, darken, grayscale, negative, sepia};
pub use crate::transform::{mirror, rotate};

pub use crate::pipeline::{apply_chain, ChainOutput, FilterOp};

// --- Prelude ---------------------------------------------------------------

/// Everything needed to load a raster and run filters on it.
///
/// ```
/// use raster_filters::prelude::*;
///
/// let img = Raster::filled(4, 4, PixelLayout::Rgb, Rgba8::rgb(100, 150, 200));
/// let gray = grayscale(&img);
/// assert_eq!(gray.get(0, 0), Rgba8::rgb(142, 142, 142));
///
/// let rotated = rotate(&img, 30.0);
/// assert_eq!((rotated.width(), rotated.height()), (4, 4));
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, ImageViewMut, PixelLayout, Raster, Rgba8};
    pub use crate::{
        box_blur, brighten, darken, detect_edges, gaussian_blur, grayscale, mirror, negative,
        pixelate, posterize, rotate, sepia, sharpen,
    };
    pub use crate::{FilterError, FilterOp};
}
