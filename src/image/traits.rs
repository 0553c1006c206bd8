//! Read/write access to row-major, tightly packed pixel buffers.
//!
//! Implementors expose their storage as one `width * height` slice; rows,
//! edge-clamped reads and bounds-checked reads are derived from it.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// All pixels, row-major, `width * height` long.
    fn as_slice(&self) -> &[Self::Pixel];

    #[inline]
    fn row(&self, y: usize) -> &[Self::Pixel] {
        let w = self.width();
        &self.as_slice()[y * w..(y + 1) * w]
    }

    fn rows(&self) -> Rows<'_, Self::Pixel> {
        Rows {
            rest: self.as_slice(),
            width: self.width(),
            remaining: self.height(),
        }
    }

    /// Pixel at `(x, y)` or `None` when the position lies outside.
    #[inline]
    fn checked(&self, x: i64, y: i64) -> Option<Self::Pixel> {
        let (w, h) = (self.width() as i64, self.height() as i64);
        if (0..w).contains(&x) && (0..h).contains(&y) {
            Some(self.as_slice()[(y * w + x) as usize])
        } else {
            None
        }
    }

    /// Pixel at `(x, y)` with both coordinates clamped to the nearest edge.
    ///
    /// The image must not be empty.
    #[inline]
    fn clamped(&self, x: isize, y: isize) -> Self::Pixel {
        let x = x.clamp(0, self.width() as isize - 1) as usize;
        let y = y.clamp(0, self.height() as isize - 1) as usize;
        self.as_slice()[y * self.width() + x]
    }
}

pub trait ImageViewMut: ImageView {
    fn as_mut_slice(&mut self) -> &mut [Self::Pixel];

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel] {
        let w = self.width();
        &mut self.as_mut_slice()[y * w..(y + 1) * w]
    }

    fn rows_mut(&mut self) -> RowsMut<'_, Self::Pixel> {
        let (width, remaining) = (self.width(), self.height());
        RowsMut {
            rest: self.as_mut_slice(),
            width,
            remaining,
        }
    }
}

/// Iterator over the rows of an [`ImageView`]. Zero-width images still
/// yield `height` empty rows.
pub struct Rows<'a, P> {
    rest: &'a [P],
    width: usize,
    remaining: usize,
}

impl<'a, P> Iterator for Rows<'a, P> {
    type Item = &'a [P];

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        let (row, rest) = self.rest.split_at(self.width);
        self.rest = rest;
        Some(row)
    }
}

pub struct RowsMut<'a, P> {
    rest: &'a mut [P],
    width: usize,
    remaining: usize,
}

impl<'a, P> Iterator for RowsMut<'a, P> {
    type Item = &'a mut [P];

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        let (row, rest) = std::mem::take(&mut self.rest).split_at_mut(self.width);
        self.rest = rest;
        Some(row)
    }
}
