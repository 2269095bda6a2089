use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    abyss::MandelbrotAbyss, greyscale::MandelbrotGreyscale, spectrum::MandelbrotSpectrum,
    woodstock::MandelbrotWoodstock,
};
use crate::core::viewport::palette::Palette;

/// One concrete colour map per palette, chosen once per state change so the
/// per-pixel loop runs against a single monomorphized map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteMap {
    Greyscale(MandelbrotGreyscale),
    Abyss(MandelbrotAbyss),
    Woodstock(MandelbrotWoodstock),
    Spectrum(MandelbrotSpectrum),
}

impl PaletteMap {
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.as_colour_map().palette()
    }

    #[must_use]
    pub fn as_colour_map(&self) -> &dyn MandelbrotColourMap {
        match self {
            Self::Greyscale(map) => map,
            Self::Abyss(map) => map,
            Self::Woodstock(map) => map,
            Self::Spectrum(map) => map,
        }
    }
}

#[must_use]
pub fn mandelbrot_colour_map_factory(palette: Palette, max_iterations: u32) -> PaletteMap {
    match palette {
        Palette::Greyscale => PaletteMap::Greyscale(MandelbrotGreyscale::new(max_iterations)),
        Palette::Abyss => PaletteMap::Abyss(MandelbrotAbyss::new(max_iterations)),
        Palette::Woodstock => PaletteMap::Woodstock(MandelbrotWoodstock::new(max_iterations)),
        Palette::Spectrum => PaletteMap::Spectrum(MandelbrotSpectrum::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn test_factory_round_trip_for_all_palettes() {
        for &palette in Palette::ALL {
            let map = mandelbrot_colour_map_factory(palette, 256);

            assert_eq!(map.palette(), palette);
            assert_eq!(map.as_colour_map().palette(), palette);
        }
    }

    #[test]
    fn test_only_woodstock_and_spectrum_discard() {
        for &palette in Palette::ALL {
            let map = mandelbrot_colour_map_factory(palette, 256);
            let discarded = map.as_colour_map().map(256).unwrap().is_none();

            assert_eq!(
                discarded,
                matches!(palette, Palette::Woodstock | Palette::Spectrum),
                "{palette}"
            );
        }
    }

    #[test]
    fn test_max_iterations_reach_the_map() {
        let map = mandelbrot_colour_map_factory(Palette::Greyscale, 16);

        assert!(map.as_colour_map().map(17).is_err());
        assert!(map.as_colour_map().map(16).is_ok());
    }
}
