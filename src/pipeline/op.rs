//! Data-driven description of a single filter call.
use crate::blur::{box_blur, gaussian_blur};
use crate::edges::{detect_edges, sharpen};
use crate::error::FilterResult;
use crate::image::Raster;
use crate::quantize::{pixelate, posterize};
use crate::tone::{brighten, darken, grayscale, negative, sepia};
use crate::transform::{mirror, rotate};
use serde::{Deserialize, Serialize};

/// One filter invocation with its parameters.
///
/// Serialized with an `op` tag, e.g. `{"op": "rotate", "angle_deg": 30.0}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterOp {
    Mirror {
        #[serde(default)]
        vertical: bool,
    },
    Rotate {
        angle_deg: f64,
    },
    DetectEdges,
    BoxBlur {
        radius: usize,
    },
    GaussianBlur {
        intensity: usize,
    },
    Sharpen {
        intensity: u32,
    },
    Grayscale,
    Sepia,
    Negative,
    Brighten {
        dial: f64,
    },
    Darken {
        dial: f64,
    },
    Posterize,
    Pixelate {
        block_size: usize,
    },
}

impl FilterOp {
    /// Stable label used in logs and timing reports.
    pub fn name(&self) -> &'static str {
        match self {
            FilterOp::Mirror { .. } => "mirror",
            FilterOp::Rotate { .. } => "rotate",
            FilterOp::DetectEdges => "detect_edges",
            FilterOp::BoxBlur { .. } => "box_blur",
            FilterOp::GaussianBlur { .. } => "gaussian_blur",
            FilterOp::Sharpen { .. } => "sharpen",
            FilterOp::Grayscale => "grayscale",
            FilterOp::Sepia => "sepia",
            FilterOp::Negative => "negative",
            FilterOp::Brighten { .. } => "brighten",
            FilterOp::Darken { .. } => "darken",
            FilterOp::Posterize => "posterize",
            FilterOp::Pixelate { .. } => "pixelate",
        }
    }

    /// Run the filter on `image`, returning a new raster.
    pub fn apply(&self, image: &Raster) -> FilterResult<Raster> {
        Ok(match *self {
            FilterOp::Mirror { vertical } => mirror(image, vertical),
            FilterOp::Rotate { angle_deg } => rotate(image, angle_deg),
            FilterOp::DetectEdges => detect_edges(image),
            FilterOp::BoxBlur { radius } => box_blur(image, radius),
            FilterOp::GaussianBlur { intensity } => gaussian_blur(image, intensity),
            FilterOp::Sharpen { intensity } => sharpen(image, intensity),
            FilterOp::Grayscale => grayscale(image),
            FilterOp::Sepia => sepia(image),
            FilterOp::Negative => negative(image),
            FilterOp::Brighten { dial } => brighten(image, dial)?,
            FilterOp::Darken { dial } => darken(image, dial)?,
            FilterOp::Posterize => posterize(image),
            FilterOp::Pixelate { block_size } => pixelate(image, block_size)?,
        })
    }
}
