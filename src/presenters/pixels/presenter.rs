use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

/// Scales the rendered frame onto the window surface and composites egui over it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    frame_width: u32,
    frame_height: u32,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    /// The framebuffer starts black at `frame_width` x `frame_height`.
    pub fn new(window: &'static Window, frame_width: u32, frame_height: u32) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(frame_width, frame_height, surface_texture)?;

        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, u8::MAX]);
        }

        let egui_renderer = EguiRenderer::new(pixels.device(), pixels.render_texture_format(), None, 1);

        Ok(Self {
            pixels,
            egui_renderer,
            frame_width,
            frame_height,
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn present_frame(&mut self, frame: &PixelBuffer) -> Result<(), GuiError> {
        let pixel_rect = frame.pixel_rect();

        if (pixel_rect.width(), pixel_rect.height()) != (self.frame_width, self.frame_height) {
            self.pixels.resize_buffer(pixel_rect.width(), pixel_rect.height())?;
            self.frame_width = pixel_rect.width();
            self.frame_height = pixel_rect.height();
        }

        copy_rgb_to_rgba(frame.buffer(), self.pixels.frame_mut())?;

        Ok(())
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let egui_renderer = &mut self.egui_renderer;
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());
            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the fractal drawn by the scaling pass.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}
