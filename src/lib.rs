//! Interactive Mandelbrot explorer: option validation, state persistence,
//! the escape-time renderer, and a windowed host behind the `gui` feature.

mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;
mod storage;

pub use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use crate::controllers::interactive::interaction_controller::InteractionController;
pub use crate::controllers::interactive::session::Session;
pub use crate::controllers::overlay::{OVERLAY_FONT_SIZE, Overlay, OverlayLine, overlay};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::snapshot::SnapshotController;
pub use crate::core::actions::render_frame::{BACKGROUND, RenderError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::kernel::EscapeTimeKernel;
pub use crate::core::fractals::mandelbrot::program::RenderProgram;
pub use crate::core::options::errors::{ConfigError, Field};
pub use crate::core::options::flag::Flag;
pub use crate::core::options::pair::OptionPair;
pub use crate::core::options::ports::state_loader::StateLoaderPort;
pub use crate::core::options::validator::OptionsValidator;
pub use crate::core::viewport::limits;
pub use crate::core::viewport::palette::Palette;
pub use crate::core::viewport::precision::Precision;
pub use crate::core::viewport::state::ViewportState;
pub use crate::logging::init_tracing;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::state_file::{PersistenceError, StateFile, deserialize, serialize};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;

/// Validates a flat `flag value flag value ...` token list, loading `-l`
/// files from disk.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<ViewportState, ConfigError> {
    OptionsValidator::new(StateFile::new()).parse(tokens)
}

/// Validates already-paired options, loading `-l` files from disk.
pub fn parse_options(pairs: &[OptionPair]) -> Result<ViewportState, ConfigError> {
    OptionsValidator::new(StateFile::new()).parse_pairs(pairs)
}
