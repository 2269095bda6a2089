use tracing::trace;

use crate::core::viewport::limits::{COORDINATE_RANGE, MAX_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::core::viewport::state::ViewportState;

/// Turns pointer and wheel input into viewport changes.
///
/// Every method keeps the state inside the bounds the options validator
/// accepts, so a state changed here can always be saved and loaded again.
#[derive(Debug)]
pub struct InteractionController<'a> {
    state: &'a mut ViewportState,
}

impl<'a> InteractionController<'a> {
    #[must_use]
    pub fn new(state: &'a mut ViewportState) -> Self {
        Self { state }
    }

    /// Pans while the button is held. Returns whether the view moved.
    pub fn on_pointer_move(&mut self, new_x: i32, new_y: i32) -> bool {
        let state = &mut *self.state;
        let mut moved = false;

        if state.pointer_down {
            let dx = (i64::from(new_x) - i64::from(state.last_pointer_x)) as f64;
            let dy = (i64::from(new_y) - i64::from(state.last_pointer_y)) as f64;

            let x = (state.x - dx * state.x_scale / f64::from(state.window_width))
                .clamp(*COORDINATE_RANGE.start(), *COORDINATE_RANGE.end());
            let y = (state.y + dy * state.y_scale / f64::from(state.window_height))
                .clamp(*COORDINATE_RANGE.start(), *COORDINATE_RANGE.end());

            moved = x != state.x || y != state.y;
            state.x = x;
            state.y = y;

            trace!(x, y, "panned");
        }

        state.last_pointer_x = new_x;
        state.last_pointer_y = new_y;

        moved
    }

    pub fn on_pointer_button(&mut self, pressed: bool) {
        self.state.pointer_down = pressed;
    }

    /// Zooms in for positive deltas and out otherwise. A step that would
    /// leave `[min_scale, 100]` is skipped. Returns whether the scale changed.
    pub fn on_scroll(&mut self, delta: f64) -> bool {
        let state = &mut *self.state;
        let factor = if delta > 0.0 { ZOOM_IN_FACTOR } else { ZOOM_OUT_FACTOR };
        let scale = state.x_scale * factor;

        if scale < state.min_scale() || scale > MAX_SCALE {
            trace!(scale = state.x_scale, "zoom limit reached");
            return false;
        }

        state.set_scale(scale);
        trace!(scale, "zoomed");

        true
    }
}
