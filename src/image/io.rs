//! Host-side I/O helpers for rasters and JSON.
//!
//! The filters never touch files; these helpers exist for the demo binary
//! and for hosts that want a quick decode/encode path.
//!
//! - `load_raster`: read a PNG/JPEG/etc. into an owned RGB or RGBA raster.
//! - `save_raster`: write a raster with the matching 8-bit colour type.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{PixelLayout, Raster};
use image::{DynamicImage, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk. `premultiplied` selects the RGBA layout.
pub fn load_raster(path: &Path, premultiplied: bool) -> Result<Raster, String> {
    let decoded =
        image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let layout = PixelLayout::from_premultiplied(premultiplied);
    let (width, height, bytes) = match layout {
        PixelLayout::Rgb => {
            let img = decoded.into_rgb8();
            (img.width(), img.height(), img.into_raw())
        }
        PixelLayout::RgbaPremultiplied => {
            let img = decoded.into_rgba8();
            (img.width(), img.height(), img.into_raw())
        }
    };
    log::debug!(
        "load_raster: {} -> {}x{} {:?}",
        path.display(),
        width,
        height,
        layout
    );
    Raster::from_bytes(width as usize, height as usize, layout, &bytes)
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save a raster as an 8-bit RGB or RGBA image, depending on its layout.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (raster.width() as u32, raster.height() as u32);
    let data = raster.to_bytes();
    let image = match raster.layout() {
        PixelLayout::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        PixelLayout::RgbaPremultiplied => {
            RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8)
        }
    }
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
