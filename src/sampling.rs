//! Scalar interpolation and channel rounding helpers.

/// Linear blend: `(1 - t) * a + t * b`.
#[inline]
pub fn lerp(a: f64, t: f64, b: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Round to nearest with ties toward +∞ (`floor(v + 0.5)`).
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Clamp an integer into the 8-bit channel range.
#[inline]
pub fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// Round a floating channel value and clamp it to `[0, 255]`.
#[inline]
pub fn quantize_channel(v: f64) -> u8 {
    clamp_channel(round_half_up(v))
}

/// Four neighbouring channel values around a fractional sample position.
#[derive(Clone, Copy, Debug)]
pub struct Quad<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_left: T,
    pub bottom_right: T,
}

/// Bilinear interpolation of one channel.
///
/// Each row is blended horizontally by `dx`, then the two row results are
/// blended vertically by `dy`. The result is rounded and clamped.
#[inline]
pub fn bilinear(q: Quad<u8>, dx: f64, dy: f64) -> u8 {
    let top = lerp(q.top_left as f64, dx, q.top_right as f64);
    let bottom = lerp(q.bottom_left as f64, dx, q.bottom_right as f64);
    quantize_channel(lerp(top, dy, bottom))
}

/// Bilinear interpolation applied independently to each of `N` channels.
pub fn bilinear_channels<const N: usize>(q: Quad<[u8; N]>, dx: f64, dy: f64) -> [u8; N] {
    std::array::from_fn(|c| {
        bilinear(
            Quad {
                top_left: q.top_left[c],
                top_right: q.top_right[c],
                bottom_left: q.bottom_left[c],
                bottom_right: q.bottom_right[c],
            },
            dx,
            dy,
        )
    })
}
