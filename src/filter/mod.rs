mod blend;
mod glitch;
mod gray_noise;
mod rainbow;

pub use blend::Blend;
pub use glitch::Glitch;
pub use gray_noise::GrayNoise;
pub use rainbow::Rainbow;

use crate::error::{Error, Result};

/// An in-place transform over a row-major `0xAARRGGBB` buffer.
///
/// `buffer.len()` is expected to equal `width * height`. Implementations
/// do not check this; go through [`apply`] when the caller can't vouch for
/// it.
pub trait Filter: Send {
    fn transform_buffer(&mut self, width: u32, height: u32, buffer: &mut [u32]);
}

/// Runs `filter` after checking that the buffer matches its dimensions.
/// On mismatch the buffer is left untouched.
pub fn apply(filter: &mut dyn Filter, width: u32, height: u32, buffer: &mut [u32]) -> Result<()> {
    let expected = (width as usize).checked_mul(height as usize);
    if expected != Some(buffer.len()) {
        return Err(Error::DimensionMismatch {
            width,
            height,
            len: buffer.len(),
        });
    }

    filter.transform_buffer(width, height, buffer);
    Ok(())
}

/// Filters applied one after another, in insertion order.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for FilterChain {
    fn transform_buffer(&mut self, width: u32, height: u32, buffer: &mut [u32]) {
        log::trace!("running {} filters over {width}x{height}", self.filters.len());
        for filter in self.filters.iter_mut() {
            filter.transform_buffer(width, height, buffer);
        }
    }
}
