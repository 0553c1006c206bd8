//! Geometric transforms: mirroring and rotation about the image centre.
pub mod mirror;
pub mod rotate;

pub use mirror::mirror;
pub use rotate::rotate;
