use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::viewport::palette::Palette;

pub trait MandelbrotColourMap:
    ColourMap<T = u32, Failure = ColourMapError> + Send + Sync
{
    fn palette(&self) -> Palette;
}

/// `iterations / max_iterations`, rejecting counts past the cap.
pub(crate) fn escape_ratio(iterations: u32, max_iterations: u32) -> Result<f64, ColourMapError> {
    if iterations > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(f64::from(iterations) / f64::from(max_iterations))
}
