use crate::image::{ImageView, Raster};

/// Reflect the image.
///
/// `vertical == true` swaps column `x` with column `W-1-x` (left/right
/// flip); otherwise row `y` is swapped with row `H-1-y` (top/bottom flip).
/// The middle column or row of an odd dimension stays in place.
pub fn mirror(image: &Raster, vertical: bool) -> Raster {
    let mut out = image.blank_like();
    let h = image.height();
    out.fill_rows(|y, dst| {
        if vertical {
            for (d, &s) in dst.iter_mut().zip(image.row(y).iter().rev()) {
                *d = s;
            }
        } else {
            dst.copy_from_slice(image.row(h - 1 - y));
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{PixelLayout, Rgba8};

    fn indexed(w: usize, h: usize) -> Raster {
        let pixels = (0..w * h).map(|i| Rgba8::rgb(i as u8, 0, 0)).collect();
        Raster::from_pixels(w, h, PixelLayout::Rgb, pixels).unwrap()
    }

    #[test]
    fn vertical_mirror_reverses_columns() {
        let img = indexed(3, 2);
        let out = mirror(&img, true);
        let reds: Vec<u8> = out.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn horizontal_mirror_reverses_rows() {
        let img = indexed(2, 3);
        let out = mirror(&img, false);
        let reds: Vec<u8> = out.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn odd_middle_column_is_fixed() {
        let img = indexed(5, 1);
        assert_eq!(mirror(&img, true).get(2, 0), img.get(2, 0));
    }

    #[test]
    fn empty_image_stays_empty() {
        let img = Raster::new(0, 4, PixelLayout::Rgb);
        let out = mirror(&img, true);
        assert_eq!((out.width(), out.height()), (0, 4));
    }
}
