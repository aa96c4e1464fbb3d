//! Packed `0xAARRGGBB` pixel helpers.
//!
//! Filters work on `u32` ARGB values; the float forms hold each channel
//! normalized to `[0.0, 1.0]` in `[a, r, g, b]` order.

use image::Rgba;

pub const ALPHA: usize = 0;
pub const RED: usize = 1;
pub const GREEN: usize = 2;
pub const BLUE: usize = 3;

/// Opaque black, used to fill cells vacated by moving filters.
pub const OPAQUE_BLACK: u32 = 0xff00_0000;

pub fn split_argb(pixel: u32) -> [u8; 4] {
    pixel.to_be_bytes()
}

pub fn merge_argb(argb: [u8; 4]) -> u32 {
    u32::from_be_bytes(argb)
}

pub fn split_float_argb(pixel: u32) -> [f32; 4] {
    split_argb(pixel).map(|c| c as f32 / 255.0)
}

/// Re-encodes normalized channels, clamping each to `[0, 1]` and rounding
/// to the nearest byte.
pub fn merge_float_argb(argb: [f32; 4]) -> u32 {
    merge_argb(argb.map(encode_channel))
}

fn encode_channel(c: f32) -> u8 {
    // NaN clamps to NaN and `as u8` maps it to 0.
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn to_rgba(pixel: u32) -> Rgba<u8> {
    let [a, r, g, b] = split_argb(pixel);
    Rgba([r, g, b, a])
}

pub fn from_rgba(px: &Rgba<u8>) -> u32 {
    let [r, g, b, a] = px.0;
    merge_argb([a, r, g, b])
}
