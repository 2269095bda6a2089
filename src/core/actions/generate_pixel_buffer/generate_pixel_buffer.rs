use std::error::Error;

use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[source] Box<dyn Error + Send + Sync>),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps row-major `input` values to colours; discarded values get `background`.
pub fn generate_pixel_buffer<CMap>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    background: Colour,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap,
    CMap::Failure: Send + Sync + 'static,
{
    let background = background.to_rgb8();
    let mut buffer = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let rgb = mapper
            .map(value)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?
            .map_or(background, Colour::to_rgb8);

        buffer.extend_from_slice(&rgb);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
