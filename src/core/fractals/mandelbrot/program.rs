use crate::core::fractals::mandelbrot::colour_mapping::factory::{
    PaletteMap, mandelbrot_colour_map_factory,
};
use crate::core::fractals::mandelbrot::kernel::EscapeTimeKernel;
use crate::core::viewport::palette::Palette;
use crate::core::viewport::precision::Precision;
use crate::core::viewport::state::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelVariant {
    Single(EscapeTimeKernel<f32>),
    Double(EscapeTimeKernel<f64>),
}

impl KernelVariant {
    #[must_use]
    pub fn precision(&self) -> Precision {
        match self {
            Self::Single(_) => Precision::Single,
            Self::Double(_) => Precision::Double,
        }
    }
}

/// Immutable per-frame snapshot of the view: the kernel in the active
/// precision paired with the active palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderProgram {
    kernel: KernelVariant,
    colour_map: PaletteMap,
}

impl RenderProgram {
    #[must_use]
    pub fn compile(state: &ViewportState) -> Self {
        let kernel = match state.precision {
            Precision::Single => KernelVariant::Single(EscapeTimeKernel::new(state)),
            Precision::Double => KernelVariant::Double(EscapeTimeKernel::new(state)),
        };

        Self {
            kernel,
            colour_map: mandelbrot_colour_map_factory(state.palette, state.max_it),
        }
    }

    #[must_use]
    pub fn kernel(&self) -> &KernelVariant {
        &self.kernel
    }

    #[must_use]
    pub fn colour_map(&self) -> &PaletteMap {
        &self.colour_map
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.kernel.precision()
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.colour_map.palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_selects_every_palette_and_precision() {
        for &palette in Palette::ALL {
            for &precision in Precision::ALL {
                let state = ViewportState {
                    palette,
                    precision,
                    ..ViewportState::default()
                };

                let program = RenderProgram::compile(&state);

                assert_eq!(program.palette(), palette);
                assert_eq!(program.precision(), precision);
            }
        }
    }

    #[test]
    fn test_compile_captures_view_parameters() {
        let state = ViewportState {
            x: 0.25,
            max_it: 64,
            precision: Precision::Double,
            ..ViewportState::default()
        };

        let program = RenderProgram::compile(&state);

        match program.kernel() {
            KernelVariant::Double(kernel) => {
                assert_eq!(kernel.max_it(), 64);
                assert_eq!(*kernel, EscapeTimeKernel::new(&state));
            }
            KernelVariant::Single(_) => panic!("expected a double precision kernel"),
        }
    }

    #[test]
    fn test_snapshot_is_independent_of_later_changes() {
        let mut state = ViewportState::default();
        let program = RenderProgram::compile(&state);

        state.x = 1.0;

        assert_ne!(program, RenderProgram::compile(&state));
    }
}
