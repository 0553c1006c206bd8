//! Owned RGB(A) raster in row-major layout (stride == width).
//!
//! Every filter reads one `Raster` and writes a freshly allocated one. Rows
//! of the output are independent, so row-wise work is routed through
//! [`Raster::fill_rows`], which fans out over rayon when the `parallel`
//! feature is enabled.
use super::pixel::{PixelLayout, Rgba8};
use super::traits::{ImageView, ImageViewMut};
use crate::error::{FilterError, FilterResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    layout: PixelLayout,
    pixels: Vec<Rgba8>,
}

impl Raster {
    /// Allocate a `width × height` raster filled with the layout background.
    pub fn new(width: usize, height: usize, layout: PixelLayout) -> Self {
        Self::filled(width, height, layout, layout.background())
    }

    /// Allocate a raster with every pixel set to `px`.
    pub fn filled(width: usize, height: usize, layout: PixelLayout, px: Rgba8) -> Self {
        Self {
            width,
            height,
            layout,
            pixels: vec![layout.normalize(px); width * height],
        }
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(
        width: usize,
        height: usize,
        layout: PixelLayout,
        mut pixels: Vec<Rgba8>,
    ) -> FilterResult<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(FilterError::mismatch(
                format!("{expected} pixels ({width}x{height})"),
                format!("{} pixels", pixels.len()),
            ));
        }
        if layout == PixelLayout::Rgb {
            for px in &mut pixels {
                px.a = 255;
            }
        }
        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Build a raster from interleaved bytes (3 per pixel for RGB, 4 for RGBA).
    pub fn from_bytes(
        width: usize,
        height: usize,
        layout: PixelLayout,
        bytes: &[u8],
    ) -> FilterResult<Self> {
        let channels = layout.channels();
        let expected = width * height * channels;
        if bytes.len() != expected {
            return Err(FilterError::mismatch(
                format!("{expected} bytes ({width}x{height}x{channels})"),
                format!("{} bytes", bytes.len()),
            ));
        }
        let pixels = bytes
            .chunks_exact(channels)
            .map(|c| match layout {
                PixelLayout::Rgb => Rgba8::rgb(c[0], c[1], c[2]),
                PixelLayout::RgbaPremultiplied => Rgba8::new(c[0], c[1], c[2], c[3]),
            })
            .collect();
        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Interleaved bytes in the raster's layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let channels = self.layout.channels();
        let mut out = Vec::with_capacity(self.pixels.len() * channels);
        for px in &self.pixels {
            out.extend_from_slice(&px.channels()[..channels]);
        }
        out
    }

    /// Blank raster with the same geometry and layout.
    pub fn blank_like(&self) -> Self {
        Self::new(self.width, self.height, self.layout)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    #[inline]
    pub fn is_premultiplied(&self) -> bool {
        self.layout.is_premultiplied()
    }

    /// True when the raster has no pixels (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgba8> {
        self.pixels
    }

    #[inline]
    /// Convert (x, y) to a linear index into the pixel buffer.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        self.pixels[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgba8) {
        let i = self.idx(x, y);
        self.pixels[i] = self.layout.normalize(px);
    }

    pub(crate) fn same_geometry(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height && self.layout == other.layout
    }

    /// Swap axes: pixel (x, y) moves to (y, x).
    pub(crate) fn transposed(&self) -> Raster {
        let mut out = Raster::new(self.height, self.width, self.layout);
        for y in 0..self.height {
            for (x, &px) in self.row(y).iter().enumerate() {
                out.pixels[x * self.height + y] = px;
            }
        }
        out
    }

    /// Run `f(y, row)` over every output row. Rows are disjoint, so with the
    /// `parallel` feature they are processed on the rayon pool.
    pub(crate) fn fill_rows<F>(&mut self, f: F)
    where
        F: Fn(usize, &mut [Rgba8]) + Send + Sync,
    {
        if self.is_empty() {
            return;
        }
        let w = self.width;
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.pixels
                .par_chunks_mut(w)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.pixels
                .chunks_mut(w)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
    }

    /// New raster with `f` applied to every pixel independently.
    pub(crate) fn map_pixels<F>(&self, f: F) -> Raster
    where
        F: Fn(Rgba8) -> Rgba8 + Send + Sync,
    {
        let mut out = self.blank_like();
        let layout = self.layout;
        out.fill_rows(|y, dst| {
            for (d, &s) in dst.iter_mut().zip(self.row(y)) {
                *d = layout.normalize(f(s));
            }
        });
        out
    }
}

impl ImageView for Raster {
    type Pixel = Rgba8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn as_slice(&self) -> &[Rgba8] {
        &self.pixels
    }
}

impl ImageViewMut for Raster {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_uses_layout_background() {
        let rgb = Raster::new(2, 2, PixelLayout::Rgb);
        assert!(rgb.pixels().iter().all(|&p| p == Rgba8::BLACK));
        let rgba = Raster::new(2, 2, PixelLayout::RgbaPremultiplied);
        assert!(rgba.pixels().iter().all(|&p| p == Rgba8::TRANSPARENT));
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = Raster::from_bytes(2, 2, PixelLayout::Rgb, &[0u8; 11]).unwrap_err();
        assert!(matches!(err, FilterError::DimensionMismatch { .. }));
        assert!(Raster::from_bytes(2, 2, PixelLayout::Rgb, &[0u8; 12]).is_ok());
        assert!(Raster::from_bytes(2, 2, PixelLayout::RgbaPremultiplied, &[0u8; 16]).is_ok());
    }

    #[test]
    fn bytes_round_trip_per_layout() {
        let bytes: Vec<u8> = (0..12).collect();
        let img = Raster::from_bytes(2, 2, PixelLayout::Rgb, &bytes).unwrap();
        assert_eq!(img.get(1, 0), Rgba8::rgb(3, 4, 5));
        assert_eq!(img.to_bytes(), bytes);

        let bytes: Vec<u8> = (0..16).collect();
        let img = Raster::from_bytes(2, 2, PixelLayout::RgbaPremultiplied, &bytes).unwrap();
        assert_eq!(img.get(0, 1), Rgba8::new(8, 9, 10, 11));
        assert_eq!(img.to_bytes(), bytes);
    }

    #[test]
    fn from_pixels_forces_opaque_rgb() {
        let img = Raster::from_pixels(1, 1, PixelLayout::Rgb, vec![Rgba8::new(1, 2, 3, 0)]).unwrap();
        assert_eq!(img.get(0, 0).a, 255);
    }

    #[test]
    fn transposed_swaps_axes() {
        let mut img = Raster::new(3, 2, PixelLayout::Rgb);
        img.set(2, 1, Rgba8::WHITE);
        let t = img.transposed();
        assert_eq!((t.width(), t.height()), (2, 3));
        assert_eq!(t.get(1, 2), Rgba8::WHITE);
        assert_eq!(t.transposed(), img);
    }

    #[test]
    fn rows_iterate_in_order() {
        let mut img = Raster::new(2, 3, PixelLayout::Rgb);
        for (y, row) in img.rows_mut().enumerate() {
            row[0] = Rgba8::rgb(y as u8, 0, 0);
        }
        let firsts: Vec<u8> = img.rows().map(|r| r[0].r).collect();
        assert_eq!(firsts, vec![0, 1, 2]);
    }

    #[test]
    fn edge_aware_reads() {
        let pixels = (0..6).map(|i| Rgba8::rgb(i, 0, 0)).collect();
        let img = Raster::from_pixels(3, 2, PixelLayout::Rgb, pixels).unwrap();
        assert_eq!(img.checked(2, 1), Some(Rgba8::rgb(5, 0, 0)));
        assert_eq!(img.checked(3, 0), None);
        assert_eq!(img.checked(0, -1), None);
        assert_eq!(img.clamped(-4, 0), Rgba8::rgb(0, 0, 0));
        assert_eq!(img.clamped(7, 9), Rgba8::rgb(5, 0, 0));
    }

    #[test]
    fn zero_width_rows_are_empty() {
        let img = Raster::new(0, 3, PixelLayout::Rgb);
        assert_eq!(img.rows().count(), 3);
        assert!(img.rows().all(|r| r.is_empty()));
    }

    #[test]
    fn empty_raster_is_empty() {
        assert!(Raster::new(0, 5, PixelLayout::Rgb).is_empty());
        assert!(Raster::new(5, 0, PixelLayout::Rgb).is_empty());
        assert!(!Raster::new(1, 1, PixelLayout::Rgb).is_empty());
    }
}
