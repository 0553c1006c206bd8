//! Separable moving-average filter with an O(1) running sum.
//!
//! Every line is filtered independently: the sum is seeded with the window
//! centred one pixel before the start, then slid one step per output pixel
//! by adding the entering sample and subtracting the leaving one. Indices
//! outside the line clamp to the nearest edge pixel (replicate). Each
//! output is `round(sum / (2r + 1))` per channel, alpha included.
//!
//! The horizontal pass runs over rows of the source into an intermediate
//! raster. The vertical pass transposes that intermediate, reuses the row
//! filter and transposes back, so both passes stream contiguous memory.
use crate::error::{FilterError, FilterResult};
use crate::image::{ImageView, Raster, Rgba8};
use crate::sampling::quantize_channel;

/// Box blur with a `(2·radius + 1)²` window. Radius 0 is the identity.
pub fn box_blur(image: &Raster, radius: usize) -> Raster {
    let mut out = image.blank_like();
    blur_into(image, &mut out, radius);
    out
}

/// Box blur writing into a caller-provided destination of identical
/// geometry and layout.
pub fn box_blur_into(src: &Raster, dst: &mut Raster, radius: usize) -> FilterResult<()> {
    if !src.same_geometry(dst) {
        return Err(FilterError::mismatch(
            format!("{}x{} {:?}", src.width(), src.height(), src.layout()),
            format!("{}x{} {:?}", dst.width(), dst.height(), dst.layout()),
        ));
    }
    blur_into(src, dst, radius);
    Ok(())
}

pub(super) fn blur_into(src: &Raster, dst: &mut Raster, radius: usize) {
    if src.is_empty() {
        *dst = src.clone();
        return;
    }
    let mut horizontal = src.blank_like();
    blur_rows(src, &mut horizontal, radius);

    let columns = horizontal.transposed();
    let mut vertical = columns.blank_like();
    blur_rows(&columns, &mut vertical, radius);
    *dst = vertical.transposed();
}

fn blur_rows(src: &Raster, dst: &mut Raster, radius: usize) {
    let scale = 1.0 / (2.0 * radius as f64 + 1.0);
    dst.fill_rows(|y, out| blur_line(src.row(y), out, radius, scale));
}

/// Running-sum mean of one line with edge replication.
///
/// Cost is linear in the line length for any radius: window positions past
/// either end all read the edge pixel, so they are counted rather than
/// visited. Sums are `i128` since a window may hold up to `2·usize::MAX + 1`
/// samples.
pub(crate) fn blur_line(line: &[Rgba8], out: &mut [Rgba8], radius: usize, scale: f64) {
    let Some(last) = line.len().checked_sub(1) else {
        return;
    };
    let at = |i: usize| -> [i128; 4] { line[i.min(last)].channels().map(i128::from) };

    // Window centred one pixel before the start: `radius + 1` copies of the
    // first pixel, then `line[0..radius]` with indices past the end clamped.
    let inside = radius.min(line.len());
    let mut sum = at(0).map(|c| c * (radius as i128 + 1));
    for px in &line[..inside] {
        add_into(&mut sum, px.channels().map(i128::from));
    }
    let overhang = (radius - inside) as i128;
    for (s, c) in sum.iter_mut().zip(at(last)) {
        *s += c * overhang;
    }

    for (x, px) in out.iter_mut().enumerate() {
        add_into(&mut sum, at(x.saturating_add(radius)));
        let leaving = x
            .checked_sub(radius)
            .and_then(|i| i.checked_sub(1))
            .unwrap_or(0);
        sub_from(&mut sum, at(leaving));
        *px = Rgba8::from_channels(sum.map(|s| quantize_channel(s as f64 * scale)));
    }
}

#[inline]
fn add_into(sum: &mut [i128; 4], v: [i128; 4]) {
    for (s, c) in sum.iter_mut().zip(v) {
        *s += c;
    }
}

#[inline]
fn sub_from(sum: &mut [i128; 4], v: [i128; 4]) {
    for (s, c) in sum.iter_mut().zip(v) {
        *s -= c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PixelLayout;

    fn row_of(values: &[u8]) -> Raster {
        let pixels = values.iter().map(|&v| Rgba8::rgb(v, v, v)).collect();
        Raster::from_pixels(values.len(), 1, PixelLayout::Rgb, pixels).unwrap()
    }

    fn reds(img: &Raster) -> Vec<u8> {
        img.pixels().iter().map(|p| p.r).collect()
    }

    #[test]
    fn radius_zero_is_identity() {
        let pixels = (0..20u8).map(|i| Rgba8::rgb(i * 11, 255 - i, i * 3)).collect();
        let img = Raster::from_pixels(5, 4, PixelLayout::Rgb, pixels).unwrap();
        assert_eq!(box_blur(&img, 0), img);
    }

    #[test]
    fn line_mean_replicates_edges() {
        let img = row_of(&[0, 90, 180]);
        // windows: [0,0,90] [0,90,180] [90,180,180]
        assert_eq!(reds(&box_blur(&img, 1)), vec![30, 90, 150]);
    }

    #[test]
    fn radius_larger_than_line() {
        let img = row_of(&[0, 30]);
        // radius 3, window of 7: x=0 -> 4·0 + 3·30 = 90, x=1 -> 3·0 + 4·30 = 120
        assert_eq!(reds(&box_blur(&img, 3)), vec![13, 17]);
    }

    #[test]
    fn huge_radius_averages_the_edges() {
        let img = row_of(&[0, 90]);
        // Both windows hold ~r copies of each edge pixel, so the mean is 45.
        for radius in [1_000_000_000, isize::MAX as usize + 1, usize::MAX] {
            assert_eq!(reds(&box_blur(&img, radius)), vec![45, 45], "radius={radius}");
        }
    }

    #[test]
    fn radius_beyond_line_matches_explicit_window() {
        let img = row_of(&[10, 20, 40]);
        // radius 5: x=0 -> 6·10 + 20 + 4·40 = 240 / 11 = 21.8
        //           x=1 -> 5·10 + 20 + 5·40 = 270 / 11 = 24.5
        //           x=2 -> 4·10 + 20 + 6·40 = 300 / 11 = 27.3
        assert_eq!(reds(&box_blur(&img, 5)), vec![22, 25, 27]);
    }

    #[test]
    fn blur_line_radius_zero_copies() {
        let line = [Rgba8::rgb(0, 0, 0), Rgba8::rgb(1, 1, 1), Rgba8::rgb(0, 0, 0)];
        let mut out = [Rgba8::BLACK; 3];
        blur_line(&line, &mut out, 0, 1.0);
        assert_eq!(out, line);
    }

    #[test]
    fn vertical_pass_runs_on_columns() {
        let pixels = [0u8, 90, 180]
            .iter()
            .map(|&v| Rgba8::rgb(v, 0, 0))
            .collect();
        let img = Raster::from_pixels(1, 3, PixelLayout::Rgb, pixels).unwrap();
        assert_eq!(reds(&box_blur(&img, 1)), vec![30, 90, 150]);
    }

    #[test]
    fn into_rejects_mismatched_destination() {
        let src = Raster::new(3, 3, PixelLayout::Rgb);
        let mut dst = Raster::new(3, 2, PixelLayout::Rgb);
        assert!(matches!(
            box_blur_into(&src, &mut dst, 1),
            Err(FilterError::DimensionMismatch { .. })
        ));
        let mut dst = Raster::new(3, 3, PixelLayout::RgbaPremultiplied);
        assert!(box_blur_into(&src, &mut dst, 1).is_err());
    }

    #[test]
    fn alpha_is_averaged_for_rgba() {
        let pixels = vec![Rgba8::new(0, 0, 0, 0), Rgba8::new(0, 0, 0, 90), Rgba8::new(0, 0, 0, 180)];
        let img = Raster::from_pixels(3, 1, PixelLayout::RgbaPremultiplied, pixels).unwrap();
        let alphas: Vec<u8> = box_blur(&img, 1).pixels().iter().map(|p| p.a).collect();
        assert_eq!(alphas, vec![30, 90, 150]);
    }
}
