//! Colour and spatial quantization: posterize and pixelate.
pub mod pixelate;
pub mod posterize;

pub use pixelate::pixelate;
pub use posterize::{posterize, posterize_level};
