use thiserror::Error;

use crate::adapters::pixel_format::PixelFormatError;
use crate::core::actions::render_frame::RenderError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize pixels buffer: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    PixelFormat(#[from] PixelFormatError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
