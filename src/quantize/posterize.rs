use crate::image::Raster;

/// Map a channel value onto the five posterization levels.
///
/// Buckets are 64 wide except the top one: only 255 itself maps to 255,
/// everything in `[192, 255)` maps to 192.
#[inline]
pub fn posterize_level(v: u8) -> u8 {
    match v {
        0..=63 => 0,
        64..=127 => 64,
        128..=191 => 128,
        192..=254 => 192,
        255 => 255,
    }
}

/// Reduce every colour channel to one of `{0, 64, 128, 192, 255}`.
pub fn posterize(image: &Raster) -> Raster {
    image.map_pixels(|px| px.with_rgb(px.rgb_channels().map(posterize_level)))
}
