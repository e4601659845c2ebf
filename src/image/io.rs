//! I/O helpers for frames and JSON summaries.
//!
//! - `load_frame`: read a PNG/JPEG/etc. into an [`ImageF32`] working buffer
//!   (color inputs are collapsed to 8-bit grayscale first).
//! - `save_frame`: write an [`ImageF32`] to a grayscale PNG, clamping to the
//!   8-bit range.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageF32;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to grayscale and lift into f32.
pub fn load_frame(path: &Path) -> Result<ImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    Ok(ImageF32::from_luma8(w, h, img.as_raw()))
}

/// Save a frame to a grayscale PNG, clamping values into [0, 255].
pub fn save_frame(frame: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(frame.w as u32, frame.h as u32);
    for y in 0..frame.h {
        let row = frame.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
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
