use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order};
use egui_winit::State as EguiWinitState;
use tracing::{error, info, warn};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::controllers::interactive::session::Session;
use crate::controllers::overlay::{Overlay, overlay};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::save_prompt::{SavePrompt, SavePromptAction};
use crate::input::gui::errors::GuiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    session: Session,
    save_prompt: Option<SavePrompt>,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        session: Session,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            session,
            save_prompt: None,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Blocks until the window closes, `Q` is pressed or presentation fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let mut outcome = Ok(());

        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                match self.handle_window_event(event) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => elwt.exit(),
                    Err(err) => {
                        error!(%err, "presentation failed");
                        outcome = Err(err);
                        elwt.exit();
                    }
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending || self.session.frame_pending() {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        outcome
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<Flow, GuiError> {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => return Ok(Flow::Exit),
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::CursorMoved { position, .. } => {
                self.session
                    .on_pointer_move(position.x as i32, position.y as i32);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                // Releases always reach the session so a drag cannot stick.
                ElementState::Released => self.session.on_pointer_button(false),
                ElementState::Pressed if !response.consumed && self.save_prompt.is_none() => {
                    self.session.on_pointer_button(true);
                }
                ElementState::Pressed => {}
            },
            WindowEvent::MouseWheel { delta, .. }
                if !response.consumed && self.save_prompt.is_none() =>
            {
                self.session.on_scroll(scroll_amount(delta));
            }
            WindowEvent::KeyboardInput { event, .. }
                if !response.consumed && self.save_prompt.is_none() =>
            {
                return Ok(self.handle_key(event));
            }
            _ => {}
        }

        Ok(Flow::Continue)
    }

    fn handle_key(&mut self, event: &KeyEvent) -> Flow {
        if event.state != ElementState::Pressed || event.repeat {
            return Flow::Continue;
        }

        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyQ) => Flow::Exit,
            PhysicalKey::Code(KeyCode::KeyS) => {
                self.save_prompt = Some(SavePrompt::new());
                self.redraw_pending = true;
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.redraw_pending = false;

        if self.session.frame_pending() {
            let frame = self.session.render_frame()?;
            self.presenter.present_frame(&frame)?;
        }

        let raw_input = self.egui_state.take_egui_input(self.window);
        let text = overlay(self.session.state());
        let mut prompt_action = None;

        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if let Some(text) = &text {
                paint_overlay(ctx, text);
            }
            if let Some(prompt) = self.save_prompt.as_mut() {
                prompt_action = prompt.show(ctx);
            }
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)?;

        if let Some(action) = prompt_action {
            self.finish_save_prompt(action);
        }

        Ok(())
    }

    fn finish_save_prompt(&mut self, action: SavePromptAction) {
        if let SavePromptAction::Save(path) = action {
            match self.session.save(&path) {
                Ok(()) => info!(path = %path.display(), "view saved"),
                Err(err) => warn!(%err, "save failed"),
            }
        }

        self.save_prompt = None;
        self.redraw_pending = true;
    }
}

fn scroll_amount(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

fn paint_overlay(ctx: &Context, text: &Overlay) {
    let painter = ctx.layer_painter(LayerId::new(Order::Background, Id::new("viewport_overlay")));
    let screen = ctx.screen_rect();
    let [r, g, b] = text.colour.to_rgb8();
    let font = FontId::proportional(text.font_size / ctx.pixels_per_point());

    for line in &text.lines {
        let position = egui::pos2(
            screen.min.x + line.x * screen.width(),
            screen.min.y + line.y * screen.height(),
        );

        painter.text(
            position,
            Align2::LEFT_BOTTOM,
            &line.text,
            font.clone(),
            Color32::from_rgb(r, g, b),
        );
    }
}
