use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::controllers::interactive::interaction_controller::InteractionController;
use crate::core::actions::render_frame::{RenderError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::program::RenderProgram;
use crate::core::viewport::state::ViewportState;
use crate::storage::state_file::{PersistenceError, StateFile};

/// Owns the live [`ViewportState`] for one run of the explorer.
///
/// Input is applied through [`InteractionController`]; any change recompiles
/// the [`RenderProgram`] and marks a frame as pending.
#[derive(Debug)]
pub struct Session {
    state: ViewportState,
    program: RenderProgram,
    frame_pending: bool,
    store: StateFile,
}

impl Session {
    #[must_use]
    pub fn new(state: ViewportState) -> Self {
        let program = RenderProgram::compile(&state);

        Self {
            state,
            program,
            frame_pending: true,
            store: StateFile::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn program(&self) -> &RenderProgram {
        &self.program
    }

    /// True before the first frame and after any change to the view.
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        if InteractionController::new(&mut self.state).on_pointer_move(x, y) {
            self.invalidate();
        }
    }

    pub fn on_pointer_button(&mut self, pressed: bool) {
        InteractionController::new(&mut self.state).on_pointer_button(pressed);
    }

    pub fn on_scroll(&mut self, delta: f64) {
        if InteractionController::new(&mut self.state).on_scroll(delta) {
            self.invalidate();
        }
    }

    /// Renders the current program at the window size and clears the pending flag.
    pub fn render_frame(&mut self) -> Result<PixelBuffer, RenderError> {
        let pixel_rect =
            PixelRect::from_dimensions(self.state.window_width, self.state.window_height)?;
        let start = Instant::now();
        let frame = render_frame(&self.program, pixel_rect)?;

        self.frame_pending = false;
        info!(
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            palette = %self.program.palette(),
            precision = %self.program.precision(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "frame rendered"
        );

        Ok(frame)
    }

    /// Writes the persisted fields to `path`. The session is unchanged either way.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        self.store.save(&self.state, path)
    }

    fn invalidate(&mut self) {
        self.program = RenderProgram::compile(&self.state);
        self.frame_pending = true;
        debug!(x = self.state.x, y = self.state.y, scale = self.state.x_scale, "view changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::ports::state_loader::StateLoaderPort;
    use crate::core::options::validator::OptionsValidator;

    #[test]
    fn test_first_frame_is_pending() {
        let session = Session::new(ViewportState::default());

        assert!(session.frame_pending());
        assert_eq!(session.program(), &RenderProgram::compile(&ViewportState::default()));
    }

    #[test]
    fn test_render_clears_pending_frame() {
        let mut session = Session::new(ViewportState {
            window_width: 250,
            window_height: 250,
            ..ViewportState::default()
        });

        let frame = session.render_frame().unwrap();

        assert!(!session.frame_pending());
        assert_eq!(frame.pixel_rect().width(), 250);
        assert_eq!(frame.buffer_size(), 250 * 250 * 3);
    }

    #[test]
    fn test_hover_does_not_request_a_frame() {
        let mut session = Session::new(ViewportState::default());
        session.render_frame().unwrap();

        session.on_pointer_move(10, 10);

        assert!(!session.frame_pending());
    }

    #[test]
    fn test_drag_and_zoom_recompile_program() {
        let mut session = Session::new(ViewportState::default());
        session.render_frame().unwrap();

        session.on_pointer_move(10, 10);
        session.on_pointer_button(true);
        session.on_pointer_move(20, 10);

        assert!(session.frame_pending());
        assert_eq!(session.program(), &RenderProgram::compile(session.state()));

        session.render_frame().unwrap();
        session.on_scroll(1.0);

        assert!(session.frame_pending());
        assert_eq!(session.program(), &RenderProgram::compile(session.state()));
    }

    #[test]
    fn test_save_then_load_reproduces_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.txt");
        let mut session = Session::new(ViewportState::default());
        session.on_scroll(1.0);
        session.on_scroll(1.0);

        session.save(&path).unwrap();
        let pairs = StateFile::new().load_options(&path).unwrap();
        let loaded = OptionsValidator::new(StateFile::new()).parse_pairs(&pairs).unwrap();

        assert!(loaded.persisted_eq(session.state()));
    }

    #[test]
    fn test_failed_save_leaves_state_untouched() {
        let session = Session::new(ViewportState::default());

        assert!(session.save("/nonexistent/dir/view.txt").is_err());
        assert_eq!(session.state(), &ViewportState::default());
    }
}
