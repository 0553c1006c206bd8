//! Pixel value and channel layout.
use serde::{Deserialize, Serialize};

/// One 8-bit RGBA pixel.
///
/// Rasters in [`PixelLayout::Rgb`] keep `a == 255` for every pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn from_channels(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub fn rgb_channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Replace the colour channels, keeping alpha.
    #[inline]
    pub fn with_rgb(self, c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2], self.a)
    }
}

/// Channel layout of a raster, selected by the premultiplied-alpha flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelLayout {
    /// Three interleaved channels; alpha is implicitly opaque.
    #[default]
    Rgb,
    /// Four interleaved channels with premultiplied alpha.
    RgbaPremultiplied,
}

impl PixelLayout {
    pub fn from_premultiplied(premultiplied: bool) -> Self {
        if premultiplied {
            PixelLayout::RgbaPremultiplied
        } else {
            PixelLayout::Rgb
        }
    }

    pub fn is_premultiplied(self) -> bool {
        self == PixelLayout::RgbaPremultiplied
    }

    /// Bytes per pixel in the interleaved representation.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::RgbaPremultiplied => 4,
        }
    }

    /// Value of a freshly allocated pixel: opaque black for RGB, transparent
    /// black for RGBA.
    pub fn background(self) -> Rgba8 {
        match self {
            PixelLayout::Rgb => Rgba8::BLACK,
            PixelLayout::RgbaPremultiplied => Rgba8::TRANSPARENT,
        }
    }

    /// Bring a pixel in line with the layout (RGB forces opaque alpha).
    #[inline]
    pub fn normalize(self, px: Rgba8) -> Rgba8 {
        match self {
            PixelLayout::Rgb => Rgba8 { a: 255, ..px },
            PixelLayout::RgbaPremultiplied => px,
        }
    }
}
