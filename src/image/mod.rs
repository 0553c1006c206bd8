//! Image data model: pixel values, channel layout, the owned `Raster`, row
//! access traits and host-side I/O helpers.
pub mod io;
pub mod pixel;
pub mod raster;
pub mod traits;

pub use self::pixel::{PixelLayout, Rgba8};
pub use self::raster::Raster;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
