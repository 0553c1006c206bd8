use crate::error::{FilterError, FilterResult};
use crate::image::{ImageView, Raster, Rgba8};

/// Replace each `block_size × block_size` tile with its mean colour.
///
/// Tiles start at the top-left corner; tiles on the right and bottom edges
/// are clipped to the image. Means are per channel (alpha included) and
/// truncated. A block larger than the image averages the whole image.
pub fn pixelate(image: &Raster, block_size: usize) -> FilterResult<Raster> {
    if block_size == 0 {
        return Err(FilterError::invalid(
            "block_size",
            block_size,
            "block size must be at least 1",
        ));
    }
    log::debug!(
        "pixelate: {}x{} block_size={block_size}",
        image.width(),
        image.height()
    );
    let blocks_x = image.width().div_ceil(block_size);
    let means = block_means(image, block_size);
    let mut out = image.blank_like();
    out.fill_rows(|y, dst| {
        let band = &means[(y / block_size) * blocks_x..];
        for (x, px) in dst.iter_mut().enumerate() {
            *px = band[x / block_size];
        }
    });
    Ok(out)
}

/// Row-major means of every (clipped) tile.
fn block_means(image: &Raster, block_size: usize) -> Vec<Rgba8> {
    let (w, h) = (image.width(), image.height());
    let blocks_x = w.div_ceil(block_size);
    let blocks_y = h.div_ceil(block_size);
    let mut means = Vec::with_capacity(blocks_x * blocks_y);
    for by in 0..blocks_y {
        let y0 = by * block_size;
        let y1 = (y0 + block_size).min(h);
        for bx in 0..blocks_x {
            let x0 = bx * block_size;
            let x1 = (x0 + block_size).min(w);
            let mut sum = [0u64; 4];
            for y in y0..y1 {
                for px in &image.row(y)[x0..x1] {
                    for (s, c) in sum.iter_mut().zip(px.channels()) {
                        *s += c as u64;
                    }
                }
            }
            let count = ((x1 - x0) * (y1 - y0)) as u64;
            means.push(Rgba8::from_channels(sum.map(|s| (s / count) as u8)));
        }
    }
    means
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelLayout;

    fn reds(img: &Raster) -> Vec<u8> {
        img.pixels().iter().map(|p| p.r).collect()
    }

    fn indexed(w: usize, h: usize, step: u8) -> Raster {
        let pixels = (0..w * h).map(|i| Rgba8::rgb(i as u8 * step, 0, 0)).collect();
        Raster::from_pixels(w, h, PixelLayout::Rgb, pixels).unwrap()
    }

    #[test]
    fn block_of_one_is_identity() {
        let img = indexed(5, 3, 13);
        assert_eq!(pixelate(&img, 1).unwrap(), img);
    }

    #[test]
    fn averages_full_blocks() {
        let out = pixelate(&indexed(4, 4, 10), 2).unwrap();
        assert_eq!(
            reds(&out),
            vec![25, 25, 45, 45, 25, 25, 45, 45, 105, 105, 125, 125, 105, 105, 125, 125]
        );
    }

    #[test]
    fn edge_blocks_are_clipped() {
        let pixels = [10u8, 20, 40].iter().map(|&v| Rgba8::rgb(v, 0, 0)).collect();
        let img = Raster::from_pixels(3, 1, PixelLayout::Rgb, pixels).unwrap();
        assert_eq!(reds(&pixelate(&img, 2).unwrap()), vec![15, 15, 40]);
    }

    #[test]
    fn means_are_truncated() {
        let pixels = [0u8, 0, 1].iter().map(|&v| Rgba8::rgb(v, 0, 0)).collect();
        let img = Raster::from_pixels(3, 1, PixelLayout::Rgb, pixels).unwrap();
        assert_eq!(reds(&pixelate(&img, 3).unwrap()), vec![0, 0, 0]);
    }

    #[test]
    fn oversized_block_averages_everything() {
        let out = pixelate(&indexed(3, 2, 10), 100).unwrap();
        // (0 + 10 + ... + 50) / 6 = 25
        assert!(out.pixels().iter().all(|p| p.r == 25));
    }

    #[test]
    fn zero_block_is_rejected() {
        let img = indexed(2, 2, 1);
        assert!(matches!(
            pixelate(&img, 0),
            Err(FilterError::InvalidParameter { name: "block_size", .. })
        ));
    }

    #[test]
    fn empty_image_passes_through() {
        let img = Raster::new(0, 3, PixelLayout::Rgb);
        let out = pixelate(&img, 2).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.height(), 3);
    }
}
