//! Brightness dial: blend every colour channel towards white or black.
use crate::error::{FilterError, FilterResult};
use crate::image::Raster;
use crate::sampling::{clamp_channel, lerp};

/// Move each colour channel towards 255 by the blend factor `dial`.
///
/// `dial` must be `>= 0`; values above 1 overshoot and saturate. Results
/// are truncated toward zero.
pub fn brighten(image: &Raster, dial: f64) -> FilterResult<Raster> {
    if !(dial >= 0.0) {
        return Err(FilterError::invalid("dial", dial, "brighten requires dial >= 0"));
    }
    log::debug!("brighten: dial={dial}");
    Ok(blend_towards(image, 255.0, dial))
}

/// Move each colour channel towards 0 by `|dial|`.
///
/// `dial` must be `<= 0`.
pub fn darken(image: &Raster, dial: f64) -> FilterResult<Raster> {
    if !(dial <= 0.0) {
        return Err(FilterError::invalid("dial", dial, "darken requires dial <= 0"));
    }
    log::debug!("darken: dial={dial}");
    Ok(blend_towards(image, 0.0, dial.abs()))
}

fn blend_towards(image: &Raster, limit: f64, t: f64) -> Raster {
    image.map_pixels(|px| {
        px.with_rgb(
            px.rgb_channels()
                .map(|c| clamp_channel(lerp(c as f64, t, limit) as i64)),
        )
    })
}
