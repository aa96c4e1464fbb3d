use image::{Pixel, Rgba};

use super::Filter;
use crate::error::{Error, Result};
use crate::pixel::{from_rgba, to_rgba};

/// Tints every pixel by compositing a fixed color over it.
pub struct Blend {
    color: Rgba<u8>,
}

impl Blend {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }

    /// Parses `RRGGBBAA`, e.g. `ff000080` for half-transparent red.
    pub fn from_hex(color: &str) -> Result<Self> {
        if color.len() != 8 || !color.is_ascii() {
            return Err(Error::InvalidColor(color.to_string()));
        }

        let mut buf = [0; 4];
        for (i, channel) in buf.iter_mut().enumerate() {
            let idx = i * 2;
            *channel = u8::from_str_radix(&color[idx..(idx + 2)], 16)
                .map_err(|_| Error::InvalidColor(color.to_string()))?;
        }

        Ok(Self::new(Rgba::from(buf)))
    }
}

impl Filter for Blend {
    fn transform_buffer(&mut self, _width: u32, _height: u32, buffer: &mut [u32]) {
        for px in buffer {
            let mut value = to_rgba(*px);
            value.blend(&self.color);
            *px = from_rgba(&value);
        }
    }
}
