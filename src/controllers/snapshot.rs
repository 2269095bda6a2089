use std::path::Path;

use tracing::info;

use crate::controllers::interactive::session::Session;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::viewport::state::ViewportState;

/// Renders a single frame of a view without a window and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, state: ViewportState) -> Result<&PixelBuffer, RenderError> {
        let mut session = Session::new(state);
        let frame = session.render_frame()?;

        Ok(self.buffer.insert(frame))
    }

    /// Writes the last generated frame. Does nothing if none was generated.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!(path = %filepath.as_ref().display(), "snapshot written");
        }

        Ok(())
    }
}
