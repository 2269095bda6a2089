use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_ratio};
use crate::core::viewport::palette::Palette;

/// Sawtooth ramps with periods 2, 4 and 8 on the red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAbyss {
    max_iterations: u32,
}

impl MandelbrotAbyss {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

/// `period * (ratio mod 1/period)`, with a floored modulo.
fn lookup(ratio: f64, period: f64) -> f64 {
    let width = 1.0 / period;

    period * (ratio - width * (ratio / width).floor())
}

impl ColourMap for MandelbrotAbyss {
    type T = u32;
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Option<Colour>, ColourMapError> {
        let ratio = escape_ratio(iterations, self.max_iterations)?;

        Ok(Some(Colour::new(
            lookup(ratio, 2.0) as f32,
            lookup(ratio, 4.0) as f32,
            lookup(ratio, 8.0) as f32,
        )))
    }
}

impl MandelbrotColourMap for MandelbrotAbyss {
    fn palette(&self) -> Palette {
        Palette::Abyss
    }
}
