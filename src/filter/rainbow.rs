use hsl::HSL;
use image::{Pixel, Rgba};

use super::Filter;
use crate::pixel::{from_rgba, to_rgba};

const FULL_TURN: usize = 360;

/// Washes the image in a hue that rotates by `speed` degrees per call.
pub struct Rainbow {
    alpha: u8,
    speed: usize,
    frame: usize,
}

impl Rainbow {
    pub fn new(alpha: u8, speed: usize) -> Self {
        Self {
            alpha,
            speed: speed % FULL_TURN,
            frame: 0,
        }
    }

    fn mask(&self) -> Rgba<u8> {
        // both factors stay below a full turn
        let hue = (self.frame * self.speed) % FULL_TURN;
        let (r, g, b) = HSL {
            h: hue as f64,
            s: 1.0,
            l: 0.5,
        }
        .to_rgb();

        Rgba::from([r, g, b, self.alpha])
    }
}

impl Filter for Rainbow {
    fn transform_buffer(&mut self, _width: u32, _height: u32, buffer: &mut [u32]) {
        let mask = self.mask();

        for px in buffer {
            let mut value = to_rgba(*px);
            value.blend(&mask);
            *px = from_rgba(&value);
        }

        self.frame = (self.frame + 1) % FULL_TURN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_red() {
        let mut filter = Rainbow::new(0xff, 10);
        let mut buffer = vec![0xff000000; 3];
        filter.transform_buffer(3, 1, &mut buffer);
        assert_eq!(buffer, vec![0xffff0000; 3]);
    }

    #[test]
    fn test_hue_advances_each_call() {
        let mut filter = Rainbow::new(0xff, 120);
        let mut buffer = vec![0xff000000];

        filter.transform_buffer(1, 1, &mut buffer);
        assert_eq!(buffer[0], 0xffff0000);

        filter.transform_buffer(1, 1, &mut buffer);
        assert_eq!(buffer[0], 0xff00ff00);

        filter.transform_buffer(1, 1, &mut buffer);
        assert_eq!(buffer[0], 0xff0000ff);

        // wraps back to red after 360 degrees
        filter.transform_buffer(1, 1, &mut buffer);
        assert_eq!(buffer[0], 0xffff0000);
    }

    #[test]
    fn test_zero_alpha_keeps_pixels() {
        let mut filter = Rainbow::new(0, 10);
        let mut buffer = vec![0xffff00ff, 0xff00ff00];
        filter.transform_buffer(2, 1, &mut buffer);
        assert_eq!(buffer, vec![0xffff00ff, 0xff00ff00]);
    }

    #[test]
    fn test_huge_speed_keeps_cycling() {
        let speed = usize::MAX / 2;
        let mut filter = Rainbow::new(0xff, speed);
        let mut expected = Rainbow::new(0xff, speed % 360);

        for _ in 0..800 {
            let mut buffer = vec![0xff000000];
            let mut reference = vec![0xff000000];
            filter.transform_buffer(1, 1, &mut buffer);
            expected.transform_buffer(1, 1, &mut reference);
            assert_eq!(buffer, reference);
        }
    }

    #[test]
    fn test_frame_counter_wraps_after_full_turn() {
        let mut filter = Rainbow::new(0xff, 1);
        let mut buffer = vec![0xff000000];
        for _ in 0..360 {
            filter.transform_buffer(1, 1, &mut buffer);
        }
        assert_eq!(filter.frame, 0);

        filter.transform_buffer(1, 1, &mut buffer);
        assert_eq!(buffer[0], 0xffff0000);
    }
}
