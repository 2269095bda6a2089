use std::marker::PhantomData;

use tracing::info;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::session::Session;
use crate::core::viewport::state::ViewportState;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    state: ViewportState,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, state: ViewportState) -> Self {
        Self {
            presenter_factory,
            state,
            _phantom: PhantomData,
        }
    }

    /// Opens a fixed-size window for the validated state and runs until it closes.
    pub fn execute(self) -> Result<(), GuiError> {
        let width = self.state.window_width;
        let height = self.state.window_height;
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window for its surface.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(width, height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window, width, height)?;
        let app = GuiApp::new(window, &event_loop, presenter, Session::new(self.state));

        info!(width, height, "window opened");
        app.run(event_loop)
    }
}
