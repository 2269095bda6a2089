use num_traits::{AsPrimitive, Float};

use crate::core::viewport::state::ViewportState;

/// Escape-time iteration with every operand in `F` (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeKernel<F> {
    x: F,
    y: F,
    x_scale: F,
    y_scale: F,
    max_it: u32,
}

impl<F> EscapeTimeKernel<F>
where
    F: Float + 'static,
    f64: AsPrimitive<F>,
{
    #[must_use]
    pub fn new(state: &ViewportState) -> Self {
        Self {
            x: state.x.as_(),
            y: state.y.as_(),
            x_scale: state.x_scale.as_(),
            y_scale: state.y_scale.as_(),
            max_it: state.max_it,
        }
    }

    #[must_use]
    pub fn max_it(&self) -> u32 {
        self.max_it
    }

    /// Iteration count for the device coordinate `(u, v)`, in `[0, max_it]`.
    ///
    /// `z` starts at `c` and the count stops at `max_it` or once `|z|^2 >= 4`.
    #[must_use]
    pub fn iterate(&self, u: F, v: F) -> u32 {
        let two = F::one() + F::one();
        let escape_radius_squared = two * two;

        let cx = u * self.x_scale + self.x;
        let cy = v * self.y_scale + self.y;

        let mut zx = cx;
        let mut zy = cy;
        let mut zx2 = zx * zx;
        let mut zy2 = zy * zy;
        let mut iterations = 0;

        while iterations < self.max_it && zx2 + zy2 < escape_radius_squared {
            zy = two * zx * zy + cy;
            zx = zx2 - zy2 + cx;
            zx2 = zx * zx;
            zy2 = zy * zy;
            iterations += 1;
        }

        iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel_at<F>(x: f64, y: f64, max_it: u32) -> EscapeTimeKernel<F>
    where
        F: Float + 'static,
        f64: AsPrimitive<F>,
    {
        let state = ViewportState {
            x,
            y,
            max_it,
            ..ViewportState::default()
        };

        EscapeTimeKernel::new(&state)
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(kernel_at::<f32>(0.0, 0.0, 250).iterate(0.0, 0.0), 250);
        assert_eq!(kernel_at::<f64>(0.0, 0.0, 50000).iterate(0.0, 0.0), 50000);
    }

    #[test]
    fn test_main_cardioid_never_escapes() {
        assert_eq!(kernel_at::<f64>(-0.25, 0.25, 1000).iterate(0.0, 0.0), 1000);
        assert_eq!(kernel_at::<f32>(-1.0, 0.0, 1000).iterate(0.0, 0.0), 1000);
    }

    #[test]
    fn test_far_points_escape_immediately() {
        assert_eq!(kernel_at::<f32>(2.0, 2.0, 250).iterate(0.0, 0.0), 0);
        assert_eq!(kernel_at::<f64>(2.0, 2.0, 250).iterate(0.0, 0.0), 0);
    }

    #[test]
    fn test_known_escape_count() {
        // c = 1: z = 1, 2, 5 so |z|^2 reaches 4 after one step.
        assert_eq!(kernel_at::<f64>(1.0, 0.0, 100).iterate(0.0, 0.0), 1);
        // c = 0.5: z = 0.5, 0.75, 1.0625, 1.62890625, 3.15... escapes after four steps.
        assert_eq!(kernel_at::<f64>(0.5, 0.0, 100).iterate(0.0, 0.0), 4);
    }

    #[test]
    fn test_device_coords_are_scaled_about_centre() {
        // Default view: c = (u * 1.5 - 0.5, v * 1.5).
        let kernel = kernel_at::<f64>(-0.5, 0.0, 250);

        assert_eq!(kernel.iterate(1.0, 0.0), kernel_at::<f64>(1.0, 0.0, 250).iterate(0.0, 0.0));
        assert_eq!(kernel.iterate(1.0 / 3.0, 0.0), 250);
    }

    #[test]
    fn test_precisions_agree_away_from_the_boundary() {
        for &(u, v) in &[(0.9, 0.9), (1.0, 1.0), (-0.3, 0.0), (0.0, 0.2), (0.0, 0.0)] {
            let single = kernel_at::<f32>(-0.5, 0.0, 250).iterate(u as f32, v as f32);
            let double = kernel_at::<f64>(-0.5, 0.0, 250).iterate(u, v);

            assert_eq!(single, double, "u={u} v={v}");
        }
    }
}
