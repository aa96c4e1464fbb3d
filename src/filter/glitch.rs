use rand::{random, rngs::StdRng, Rng, SeedableRng};

use super::Filter;
use crate::pixel::OPAQUE_BLACK;

const PRESET: [i32; 10] = [-3, -2, -1, 0, 0, 0, 0, 1, 2, 3];

/// Tears the image into horizontally displaced bands.
///
/// Unlike the other filters this one needs `width`: rows are shifted as a
/// whole and cells uncovered by a shift become opaque black. The pattern is
/// reseeded every fourth call so each tear holds for a few frames.
pub struct Glitch {
    factor: i32,
    seed: u64,
    index: u64,
}

impl Glitch {
    pub fn new(factor: u32) -> Self {
        Self::with_seed(factor, random())
    }

    pub fn with_seed(factor: u32, seed: u64) -> Self {
        let factor = factor.clamp(1, i32::MAX as u32) as i32;
        log::debug!("glitch filter, factor {factor}");
        Self {
            factor,
            seed,
            index: 0,
        }
    }

    fn pick_offset(&self, rng: &mut StdRng) -> i32 {
        PRESET[rng.random::<u8>() as usize % PRESET.len()].saturating_mul(self.factor)
    }
}

impl Filter for Glitch {
    fn transform_buffer(&mut self, width: u32, _height: u32, buffer: &mut [u32]) {
        if self.index % 4 == 0 {
            self.seed = self.seed.wrapping_add(1);
        }
        self.index += 1;

        if width == 0 {
            return;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut offset = self.pick_offset(&mut rng);

        for (y, row) in buffer.chunks_mut(width as usize).enumerate() {
            if y > 0 && rng.random_bool(1.0 / self.factor as f64) {
                offset = self.pick_offset(&mut rng);
            }
            shift_row(row, offset);
        }
    }
}

fn shift_row(row: &mut [u32], offset: i32) {
    let len = row.len();
    let shift = offset.unsigned_abs() as usize;

    if shift >= len {
        if shift > 0 {
            row.fill(OPAQUE_BLACK);
        }
        return;
    }

    if offset > 0 {
        row.copy_within(..len - shift, shift);
        row[..shift].fill(OPAQUE_BLACK);
    } else if offset < 0 {
        row.copy_within(shift.., 0);
        row[len - shift..].fill(OPAQUE_BLACK);
    }
}
