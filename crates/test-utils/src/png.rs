//! PNG helpers for asserting on encoded charts.

use image::{ImageFormat, RgbaImage};

/// PNG colour type for palette images.
pub const COLOR_TYPE_INDEXED: u8 = 3;
/// PNG colour type for 8-bit RGBA images.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Decode PNG bytes to RGBA, expanding palettes and `tRNS` alpha.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, String> {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map(|img| img.to_rgba8())
        .map_err(|e| format!("Failed to decode PNG: {}", e))
}

/// Colour type byte from the IHDR chunk, which always comes first.
pub fn png_color_type(bytes: &[u8]) -> Option<u8> {
    if bytes.get(12..16)? != b"IHDR" {
        return None;
    }
    bytes.get(25).copied()
}

/// Number of pixels with exactly this RGB color.
pub fn count_rgb(image: &RgbaImage, rgb: [u8; 3]) -> usize {
    image.pixels().filter(|p| p.0[..3] == rgb).count()
}
