/// An RGB colour with components nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantizes to 8 bits per channel, clamping out-of-range components.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }
}

fn channel_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb8_maps_unit_range() {
        assert_eq!(Colour::BLACK.to_rgb8(), [0, 0, 0]);
        assert_eq!(Colour::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Colour::new(0.5, 0.25, 1.0).to_rgb8(), [128, 64, 255]);
    }

    #[test]
    fn test_to_rgb8_clamps_out_of_range() {
        assert_eq!(Colour::new(-1.0, 2.0, f32::NAN).to_rgb8(), [0, 255, 0]);
    }
}
