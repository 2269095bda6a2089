use crate::core::data::colour::Colour;
use crate::core::viewport::state::ViewportState;

/// Glyph height, in pixels, at the reference window size.
pub const OVERLAY_FONT_SIZE: f32 = 24.0;

/// One line of the coordinate read-out, positioned as fractions of the
/// window measured from the top-left corner to the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub lines: Vec<OverlayLine>,
    pub font_size: f32,
    pub colour: Colour,
}

/// Centre and scale read-out for the lower-left corner, or `None` when text is off.
#[must_use]
pub fn overlay(state: &ViewportState) -> Option<Overlay> {
    if !state.display_text {
        return None;
    }

    let lines = [
        (format!("X: {}", state.x), -0.7),
        (format!("Y: {}", state.y), -0.8),
        (format!("S: {}", state.x_scale), -0.9),
    ]
    .into_iter()
    .map(|(text, baseline)| OverlayLine {
        text,
        x: device_to_fraction(-0.9),
        y: device_to_fraction(-baseline),
    })
    .collect();

    Some(Overlay {
        lines,
        font_size: OVERLAY_FONT_SIZE * state.text_scale(),
        colour: state.text_colour(),
    })
}

fn device_to_fraction(coordinate: f32) -> f32 {
    (coordinate + 1.0) / 2.0
}
