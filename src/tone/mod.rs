//! Per-pixel tone maps. Every operation touches R, G and B only and copies
//! alpha from the source pixel.
pub mod color;
pub mod light;

pub use color::{grayscale, luma, negative, sepia};
pub use light::{brighten, darken};
