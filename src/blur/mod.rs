//! Box blur and its three-pass Gaussian approximation.
//!
//! A single box pass is a mean filter; repeating it three times with radii
//! `(i, i+1, i+1)` converges towards a Gaussian of comparable spread at a
//! cost independent of the radius. Borders replicate edge pixels.

pub mod box_blur;
pub mod gaussian;

pub use box_blur::{box_blur, box_blur_into};
pub use gaussian::{box_radii, gaussian_blur};
