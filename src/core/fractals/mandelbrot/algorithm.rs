use num_traits::{AsPrimitive, Float};

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::kernel::EscapeTimeKernel;
use crate::core::util::pixel_to_device_coords::{
    PixelToDeviceCoordsError, pixel_to_device_coords,
};

/// Runs an [`EscapeTimeKernel`] at the centre of each pixel of a frame.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm<F> {
    pixel_rect: PixelRect,
    kernel: EscapeTimeKernel<F>,
}

impl<F> MandelbrotAlgorithm<F> {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, kernel: EscapeTimeKernel<F>) -> Self {
        Self { pixel_rect, kernel }
    }
}

impl<F> FractalAlgorithm for MandelbrotAlgorithm<F>
where
    F: Float + 'static,
    f64: AsPrimitive<F>,
{
    type Success = u32;
    type Failure = PixelToDeviceCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let coords = pixel_to_device_coords(pixel, self.pixel_rect)?;

        Ok(self.kernel.iterate(coords.u.as_(), coords.v.as_()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::state::ViewportState;

    #[test]
    fn test_centre_of_default_view_is_inside() {
        let state = ViewportState::default();
        let pixel_rect = PixelRect::from_dimensions(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, EscapeTimeKernel::<f64>::new(&state));

        // Pixel (2, 1) centre is (0.25, 0.25): c = (-0.125, 0.375).
        assert_eq!(algorithm.compute(Point { x: 2, y: 1 }), Ok(250));
    }

    #[test]
    fn test_corner_of_default_view_escapes() {
        let state = ViewportState::default();
        let pixel_rect = PixelRect::from_dimensions(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, EscapeTimeKernel::<f32>::new(&state));

        // Pixel (3, 0) centre is (0.75, 0.75): c = (0.625, 1.125).
        assert!(algorithm.compute(Point { x: 3, y: 0 }).unwrap() < 5);
    }

    #[test]
    fn test_pixel_outside_frame_fails() {
        let state = ViewportState::default();
        let pixel_rect = PixelRect::from_dimensions(4, 4).unwrap();
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, EscapeTimeKernel::<f64>::new(&state));

        assert!(matches!(
            algorithm.compute(Point { x: 0, y: 4 }),
            Err(PixelToDeviceCoordsError::PointOutsideRect { .. })
        ));
    }
}
