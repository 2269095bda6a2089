use std::f64::consts::TAU;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_ratio};
use crate::core::viewport::palette::Palette;

const RED_PHASE: f64 = TAU / 3.0;
const GREEN_PHASE: f64 = 2.0 * TAU / 3.0;
const BLUE_PHASE: f64 = 0.0;

/// Phase-shifted cosine waves, dimmed towards low iteration counts.
/// Points that never escape are discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotWoodstock {
    max_iterations: u32,
}

impl MandelbrotWoodstock {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

fn lookup(ratio: f64, phase: f64) -> f64 {
    ((ratio * TAU + phase).cos() + 1.0) / 2.0 * ratio.powf(0.25)
}

impl ColourMap for MandelbrotWoodstock {
    type T = u32;
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Option<Colour>, ColourMapError> {
        let ratio = escape_ratio(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(None);
        }

        Ok(Some(Colour::new(
            lookup(ratio, RED_PHASE) as f32,
            lookup(ratio, GREEN_PHASE) as f32,
            lookup(ratio, BLUE_PHASE) as f32,
        )))
    }
}

impl MandelbrotColourMap for MandelbrotWoodstock {
    fn palette(&self) -> Palette {
        Palette::Woodstock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_discards_points_inside_the_set() {
        let mapper = MandelbrotWoodstock::new(250);

        assert_eq!(mapper.map(250), Ok(None));
    }

    #[test]
    fn test_map_is_black_at_zero_iterations() {
        let mapper = MandelbrotWoodstock::new(250);

        assert_eq!(mapper.map(0), Ok(Some(Colour::BLACK)));
    }

    #[test]
    fn test_map_half_way() {
        let mapper = MandelbrotWoodstock::new(16);
        let colour = mapper.map(8).unwrap().unwrap();
        let brightness = 0.5f64.powf(0.25);

        // cos(pi + 2pi/3) = cos(pi + 4pi/3) = 0.5 and cos(pi) = -1
        assert!((f64::from(colour.r) - 0.75 * brightness).abs() < 1e-6);
        assert!((f64::from(colour.g) - 0.75 * brightness).abs() < 1e-6);
        assert!(colour.b.abs() < 1e-6);
    }

    #[test]
    fn test_map_rejects_counts_past_max() {
        let mapper = MandelbrotWoodstock::new(16);

        assert!(mapper.map(17).is_err());
    }
}
