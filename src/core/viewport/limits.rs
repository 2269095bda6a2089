use std::ops::RangeInclusive;

pub const DIMENSION_RANGE: RangeInclusive<u32> = 250..=1000;
pub const COORDINATE_RANGE: RangeInclusive<f64> = -2.0..=2.0;
pub const MAX_ITERATIONS_RANGE: RangeInclusive<u32> = 16..=50000;
pub const MAX_SCALE: f64 = 100.0;

pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

/// Window width at which overlay text is drawn at its native size.
pub const REFERENCE_DIMENSION: u32 = 750;
