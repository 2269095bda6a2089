use crate::core::data::colour::Colour;
use crate::core::viewport::limits::{MAX_SCALE, REFERENCE_DIMENSION};
use crate::core::viewport::palette::Palette;
use crate::core::viewport::precision::Precision;

/// Everything needed to draw one view of the set, plus the transient pointer
/// state used while dragging.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    pub window_width: u32,
    pub window_height: u32,
    pub x: f64,
    pub y: f64,
    pub x_scale: f64,
    pub y_scale: f64,
    pub max_it: u32,
    pub palette: Palette,
    pub precision: Precision,
    pub display_text: bool,
    pub pointer_down: bool,
    pub last_pointer_x: i32,
    pub last_pointer_y: i32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            window_width: 750,
            window_height: 750,
            x: -0.5,
            y: 0.0,
            x_scale: 1.5,
            y_scale: 1.5,
            max_it: 250,
            palette: Palette::default(),
            precision: Precision::default(),
            display_text: true,
            pointer_down: false,
            last_pointer_x: 0,
            last_pointer_y: 0,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn text_colour(&self) -> Colour {
        self.palette.text_colour()
    }

    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.precision.min_scale()
    }

    pub fn set_dimension(&mut self, dimension: u32) {
        self.window_width = dimension;
        self.window_height = dimension;
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.x_scale = scale;
        self.y_scale = scale;
    }

    /// Overlay text scale relative to the reference window size.
    #[must_use]
    pub fn text_scale(&self) -> f32 {
        self.window_width as f32 / REFERENCE_DIMENSION as f32
    }

    /// Whether the scale satisfies both the upper bound and the precision floor.
    #[must_use]
    pub fn scale_in_bounds(&self) -> bool {
        self.x_scale <= MAX_SCALE && self.x_scale >= self.min_scale()
    }

    /// Equality over the fields written to a state file.
    #[must_use]
    pub fn persisted_eq(&self, other: &Self) -> bool {
        self.window_width == other.window_width
            && self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.x_scale.to_bits() == other.x_scale.to_bits()
            && self.max_it == other.max_it
            && self.palette == other.palette
            && self.precision == other.precision
            && self.display_text == other.display_text
    }
}
