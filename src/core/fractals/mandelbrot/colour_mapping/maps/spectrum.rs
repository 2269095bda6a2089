use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_ratio};
use crate::core::viewport::palette::Palette;

/// A six segment hue wheel from red through green and blue back to red.
/// Points that never escape are discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotSpectrum {
    max_iterations: u32,
}

impl MandelbrotSpectrum {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

fn hue_wheel(ratio: f64) -> Colour {
    let position = ratio * 6.0;
    let step = position.floor();
    let frac = (position - step) as f32;
    let inv = 1.0 - frac;

    match step as i64 {
        0 => Colour::new(1.0, frac, 0.0),
        1 => Colour::new(inv, 1.0, 0.0),
        2 => Colour::new(0.0, 1.0, frac),
        3 => Colour::new(0.0, inv, 1.0),
        4 => Colour::new(frac, 0.0, 1.0),
        _ => Colour::new(1.0, 0.0, inv),
    }
}

impl ColourMap for MandelbrotSpectrum {
    type T = u32;
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Option<Colour>, ColourMapError> {
        let ratio = escape_ratio(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(None);
        }

        Ok(Some(hue_wheel(ratio)))
    }
}

impl MandelbrotColourMap for MandelbrotSpectrum {
    fn palette(&self) -> Palette {
        Palette::Spectrum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_discards_points_inside_the_set() {
        assert_eq!(MandelbrotSpectrum::new(16).map(16), Ok(None));
    }

    #[test]
    fn test_map_walks_each_segment() {
        let mapper = MandelbrotSpectrum::new(16);
        let cases = [
            (0, Colour::new(1.0, 0.0, 0.0)),
            (1, Colour::new(1.0, 0.375, 0.0)),
            (4, Colour::new(0.5, 1.0, 0.0)),
            (7, Colour::new(0.0, 1.0, 0.625)),
            (9, Colour::new(0.0, 0.625, 1.0)),
            (12, Colour::new(0.5, 0.0, 1.0)),
            (15, Colour::new(1.0, 0.0, 0.375)),
        ];

        for (iterations, expected) in cases {
            assert_eq!(mapper.map(iterations), Ok(Some(expected)), "iterations {iterations}");
        }
    }

    #[test]
    fn test_segments_join_continuously() {
        for step in 1..6 {
            let boundary = f64::from(step) / 6.0;
            let before = hue_wheel(boundary - 1e-9);
            let after = hue_wheel(boundary + 1e-9);

            assert!((before.r - after.r).abs() < 1e-6, "step {step}");
            assert!((before.g - after.g).abs() < 1e-6, "step {step}");
            assert!((before.b - after.b).abs() < 1e-6, "step {step}");
        }
    }
}
