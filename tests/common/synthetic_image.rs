use raster_filters::{PixelLayout, Raster, Rgba8};

/// High-contrast checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize, layout: PixelLayout) -> Raster {
    assert!(cell > 0, "cell size must be positive");
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let v = if (x / cell + y / cell) & 1 == 0 { 32u8 } else { 220u8 };
            pixels.push(Rgba8::rgb(v, v, v));
        }
    }
    Raster::from_pixels(width, height, layout, pixels).expect("checkerboard geometry")
}

/// Distinct colour per pixel: red follows x, green follows y, blue mixes both.
pub fn gradient(width: usize, height: usize) -> Raster {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.saturating_sub(1).max(1)) as u8;
            let g = (y * 255 / height.saturating_sub(1).max(1)) as u8;
            let b = ((x * 7 + y * 13) % 256) as u8;
            pixels.push(Rgba8::rgb(r, g, b));
        }
    }
    Raster::from_pixels(width, height, PixelLayout::Rgb, pixels).expect("gradient geometry")
}

/// Premultiplied RGBA raster with varying alpha.
pub fn translucent(width: usize, height: usize) -> Raster {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let a = ((x + y) * 37 % 256) as u8;
            let c = a / 2;
            pixels.push(Rgba8::new(c, a / 3, c, a));
        }
    }
    Raster::from_pixels(width, height, PixelLayout::RgbaPremultiplied, pixels)
        .expect("translucent geometry")
}
