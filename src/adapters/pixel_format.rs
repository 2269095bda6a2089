//! Pixel format conversion between the renderer's RGB frames and RGBA surfaces.

use thiserror::Error;

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb source length {0} is not a multiple of 3")]
    PartialPixel(usize),
    #[error("rgba destination length {actual} does not match expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Copies packed RGB into packed RGBA, forcing alpha to 255.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::PartialPixel(src.len()));
    }

    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;
    if dst.len() != expected {
        return Err(PixelFormatError::SizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}
