use num_traits::{AsPrimitive, Float};
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::PaletteMap;
use crate::core::fractals::mandelbrot::kernel::EscapeTimeKernel;
use crate::core::fractals::mandelbrot::program::{KernelVariant, RenderProgram};
use crate::core::util::pixel_to_device_coords::PixelToDeviceCoordsError;

/// Colour shown where a palette discards a pixel.
pub const BACKGROUND: Colour = Colour::BLACK;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid frame size: {0}")]
    FrameSize(#[from] PixelRectError),
    #[error("failed to compute iterations: {0}")]
    Coordinates(#[from] PixelToDeviceCoordsError),
    #[error("failed to colour frame: {0}")]
    PixelBuffer(#[from] GeneratePixelBufferError),
}

/// Renders one frame of `program` over `pixel_rect`.
///
/// The kernel and palette variants are resolved here, once per frame.
pub fn render_frame(program: &RenderProgram, pixel_rect: PixelRect) -> Result<PixelBuffer, RenderError> {
    match *program.kernel() {
        KernelVariant::Single(kernel) => render_with_kernel(kernel, program.colour_map(), pixel_rect),
        KernelVariant::Double(kernel) => render_with_kernel(kernel, program.colour_map(), pixel_rect),
    }
}

fn render_with_kernel<F>(
    kernel: EscapeTimeKernel<F>,
    colour_map: &PaletteMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, RenderError>
where
    F: Float + Send + Sync + 'static,
    f64: AsPrimitive<F>,
{
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, kernel);
    let iterations = generate_fractal_parallel_rayon(pixel_rect, &algorithm)?;

    let buffer = match colour_map {
        PaletteMap::Greyscale(map) => generate_pixel_buffer(iterations, map, pixel_rect, BACKGROUND),
        PaletteMap::Abyss(map) => generate_pixel_buffer(iterations, map, pixel_rect, BACKGROUND),
        PaletteMap::Woodstock(map) => generate_pixel_buffer(iterations, map, pixel_rect, BACKGROUND),
        PaletteMap::Spectrum(map) => generate_pixel_buffer(iterations, map, pixel_rect, BACKGROUND),
    }?;

    Ok(buffer)
}
