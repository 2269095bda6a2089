use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToDeviceCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
        point.x, point.y,
        pixel_rect.top_left().x, pixel_rect.top_left().y,
        pixel_rect.bottom_right().x, pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Normalized device coordinates: both axes in `[-1, 1]`, `v` pointing up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DeviceCoords {
    pub u: f64,
    pub v: f64,
}

/// Maps the centre of `pixel_position` to device coordinates, with the top-left
/// pixel near `(-1, 1)` and the bottom-right pixel near `(1, -1)`.
pub fn pixel_to_device_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
) -> Result<DeviceCoords, PixelToDeviceCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToDeviceCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_x = f64::from(pixel_position.x - pixel_rect.top_left().x) + 0.5;
    let relative_y = f64::from(pixel_position.y - pixel_rect.top_left().y) + 0.5;
    let u = 2.0 * relative_x / f64::from(pixel_rect.width()) - 1.0;
    let v = 1.0 - 2.0 * relative_y / f64::from(pixel_rect.height());

    Ok(DeviceCoords { u, v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_pixel_centres() {
        let pixel_rect = PixelRect::from_dimensions(4, 4).unwrap();

        let top_left = pixel_to_device_coords(Point { x: 0, y: 0 }, pixel_rect).unwrap();
        let bottom_right = pixel_to_device_coords(Point { x: 3, y: 3 }, pixel_rect).unwrap();

        assert_eq!(top_left, DeviceCoords { u: -0.75, v: 0.75 });
        assert_eq!(bottom_right, DeviceCoords { u: 0.75, v: -0.75 });
    }

    #[test]
    fn test_offset_rect_is_relative() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 11, y: 21 }).unwrap();

        let coords = pixel_to_device_coords(Point { x: 11, y: 20 }, pixel_rect).unwrap();

        assert_eq!(coords, DeviceCoords { u: 0.5, v: 0.5 });
    }

    #[test]
    fn test_symmetric_about_centre() {
        let pixel_rect = PixelRect::from_dimensions(750, 750).unwrap();

        let left = pixel_to_device_coords(Point { x: 100, y: 600 }, pixel_rect).unwrap();
        let right = pixel_to_device_coords(Point { x: 649, y: 149 }, pixel_rect).unwrap();

        assert!((left.u + right.u).abs() < 1e-12);
        assert!((left.v + right.v).abs() < 1e-12);
    }

    #[test]
    fn test_point_outside_rect() {
        let pixel_rect = PixelRect::from_dimensions(4, 4).unwrap();
        let point = Point { x: 4, y: 0 };

        assert_eq!(
            pixel_to_device_coords(point, pixel_rect),
            Err(PixelToDeviceCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }
}
