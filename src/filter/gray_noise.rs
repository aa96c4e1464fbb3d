use rand::{rngs::StdRng, Rng, SeedableRng};

use super::Filter;
use crate::pixel::{merge_float_argb, split_float_argb, BLUE, GREEN, RED};

/// Colorless static: darkens each pixel by a random factor in
/// `[1 - intensity, 1]`, the same factor for all three color channels.
pub struct GrayNoise<R = StdRng> {
    intensity: f32,
    rng: R,
}

impl GrayNoise<StdRng> {
    pub fn new(intensity: f32) -> Self {
        Self::with_rng(intensity, StdRng::from_os_rng())
    }
}

impl<R: Rng> GrayNoise<R> {
    pub fn with_rng(intensity: f32, rng: R) -> Self {
        log::debug!("gray noise filter, intensity {intensity}");
        Self {
            intensity: sanitize(intensity),
            rng,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = sanitize(intensity);
    }
}

/// Keeps `1 - intensity` a valid lower bound for `clamp`.
fn sanitize(intensity: f32) -> f32 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

impl<R: Rng + Send> Filter for GrayNoise<R> {
    fn transform_buffer(&mut self, _width: u32, _height: u32, buffer: &mut [u32]) {
        let floor = 1.0 - self.intensity;

        for px in buffer {
            let mut argb = split_float_argb(*px);
            let v = self.rng.random::<f32>().clamp(floor, 1.0);

            argb[RED] *= v;
            argb[GREEN] *= v;
            argb[BLUE] *= v;

            *px = merge_float_argb(argb);
        }
    }
}
