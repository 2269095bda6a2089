use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    /// Replaces the framebuffer contents with `frame`.
    fn present_frame(&mut self, frame: &PixelBuffer) -> Result<(), GuiError>;

    /// Draws the framebuffer and the egui output on top of it.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
}
