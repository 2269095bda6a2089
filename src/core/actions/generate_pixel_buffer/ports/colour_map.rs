use std::error::Error;

use crate::core::data::colour::Colour;

/// Maps one computed value to a colour, or to `None` when the pixel is
/// discarded and should show the background.
pub trait ColourMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<Option<Colour>, Self::Failure>;
}
