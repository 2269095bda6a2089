use std::fmt;
use std::str::FromStr;

use crate::core::data::colour::Colour;

/// Colour palettes selectable with `-c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Greyscale,
    Abyss,
    Woodstock,
    Spectrum,
}

impl Palette {
    pub const ALL: &'static [Self] = &[
        Self::Greyscale,
        Self::Abyss,
        Self::Woodstock,
        Self::Spectrum,
    ];

    /// Name used on the command line and in state files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greyscale => "greyscale",
            Self::Abyss => "abyss",
            Self::Woodstock => "woodstock",
            Self::Spectrum => "spectrum",
        }
    }

    /// Overlay text colour paired with this palette.
    #[must_use]
    pub const fn text_colour(self) -> Colour {
        match self {
            Self::Greyscale => Colour::RED,
            Self::Abyss | Self::Woodstock | Self::Spectrum => Colour::WHITE,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPalette(pub String);

impl FromStr for Palette {
    type Err = UnknownPalette;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|palette| palette.name() == value)
            .ok_or_else(|| UnknownPalette(value.to_owned()))
    }
}
