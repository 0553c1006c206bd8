//! Watermark overlay: blend host-rendered glyph coverage over a raster.
//!
//! Turning text into glyph coverage needs a font stack, which the host
//! provides through [`TextRasterizer`]. This module only composites the
//! resulting [`CoverageMask`].

pub mod watermark;

pub use watermark::{watermark, CoverageMask, TextRasterizer, WatermarkOptions};
