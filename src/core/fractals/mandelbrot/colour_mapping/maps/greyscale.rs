use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_ratio};
use crate::core::viewport::palette::Palette;

/// White for points that escape at once, fading to black inside the set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotGreyscale {
    max_iterations: u32,
}

impl MandelbrotGreyscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for MandelbrotGreyscale {
    type T = u32;
    type Failure = ColourMapError;

    fn map(&self, iterations: u32) -> Result<Option<Colour>, ColourMapError> {
        let level = (1.0 - escape_ratio(iterations, self.max_iterations)?) as f32;

        Ok(Some(Colour::new(level, level, level)))
    }
}

impl MandelbrotColourMap for MandelbrotGreyscale {
    fn palette(&self) -> Palette {
        Palette::Greyscale
    }
}
