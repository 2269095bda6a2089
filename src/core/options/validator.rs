use std::ops::RangeInclusive;
use std::path::Path;

use tracing::{debug, info};

use crate::core::options::errors::{ConfigError, Field};
use crate::core::options::flag::Flag;
use crate::core::options::pair::{OptionPair, flatten_pairs};
use crate::core::options::ports::state_loader::StateLoaderPort;
use crate::core::viewport::limits::{
    COORDINATE_RANGE, DIMENSION_RANGE, MAX_ITERATIONS_RANGE, MAX_SCALE,
};
use crate::core::viewport::palette::Palette;
use crate::core::viewport::precision::Precision;
use crate::core::viewport::state::ViewportState;

/// Builds a [`ViewportState`] from a flat `flag value flag value ...` token list.
///
/// Flags are applied left to right over the defaults, later flags overwriting
/// earlier ones. Each value is range checked as soon as it is read, except the
/// scale, which is checked once against the final precision after every flag
/// has been applied. The first error aborts the parse.
#[derive(Debug)]
pub struct OptionsValidator<L: StateLoaderPort> {
    loader: L,
}

impl<L: StateLoaderPort> OptionsValidator<L> {
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ViewportState, ConfigError> {
        self.parse_tokens(tokens, true)
    }

    pub fn parse_pairs(&self, pairs: &[OptionPair]) -> Result<ViewportState, ConfigError> {
        self.parse(&flatten_pairs(pairs))
    }

    fn parse_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        allow_load: bool,
    ) -> Result<ViewportState, ConfigError> {
        let mut state = ViewportState::default();

        for (index, chunk) in tokens.chunks(2).enumerate() {
            let token = chunk[0].as_ref();
            let flag = Flag::from_token(token)
                .ok_or_else(|| ConfigError::UnrecognizedOption(token.to_owned()))?;
            let value = chunk
                .get(1)
                .map(AsRef::as_ref)
                .ok_or_else(|| ConfigError::MissingValue(token.to_owned()))?;

            if flag == Flag::Load {
                // A nested -l inside a state file would recurse forever.
                if tokens.len() != 2 || !allow_load {
                    return Err(ConfigError::ExclusivityViolation);
                }

                info!(path = value, "loading state file");
                let pairs = self.loader.load_options(Path::new(value))?;

                return self.parse_tokens(&flatten_pairs(&pairs), false);
            }

            debug!(position = index, flag = %flag, value, "applying option");
            apply_option(&mut state, flag, value)?;
        }

        check_scale(&state)?;

        Ok(state)
    }
}

fn apply_option(state: &mut ViewportState, flag: Flag, value: &str) -> Result<(), ConfigError> {
    match flag {
        Flag::Load => return Err(ConfigError::ExclusivityViolation),
        Flag::Dimension => {
            let dimension = parse_integer(Field::Dimension, value)?;
            let dimension = check_range(Field::Dimension, value, dimension, widen(DIMENSION_RANGE))?;
            state.set_dimension(dimension as u32);
        }
        Flag::X => {
            let x = parse_real(Field::X, value)?;
            state.x = check_range(Field::X, value, x, COORDINATE_RANGE)?;
        }
        Flag::Y => {
            let y = parse_real(Field::Y, value)?;
            state.y = check_range(Field::Y, value, y, COORDINATE_RANGE)?;
        }
        Flag::Scale => {
            state.set_scale(parse_real(Field::Scale, value)?);
        }
        Flag::MaxIterations => {
            let max_it = parse_integer(Field::MaxIterations, value)?;
            let max_it = check_range(
                Field::MaxIterations,
                value,
                max_it,
                widen(MAX_ITERATIONS_RANGE),
            )?;
            state.max_it = max_it as u32;
        }
        Flag::Palette => {
            state.palette = value
                .parse::<Palette>()
                .map_err(|_| out_of_range(Field::Palette, value))?;
        }
        Flag::Precision => {
            state.precision = value
                .parse::<Precision>()
                .map_err(|_| out_of_range(Field::Precision, value))?;
        }
        Flag::DisplayText => {
            state.display_text = match value {
                "true" => true,
                "false" => false,
                _ => return Err(out_of_range(Field::DisplayText, value)),
            };
        }
    }

    Ok(())
}

fn check_scale(state: &ViewportState) -> Result<(), ConfigError> {
    let scale = state.x_scale;

    if scale > MAX_SCALE {
        return Err(ConfigError::ScaleTooLarge { scale });
    }

    if scale < state.min_scale() {
        return Err(ConfigError::ScaleTooSmall {
            scale,
            precision: state.precision,
        });
    }

    Ok(())
}

fn parse_integer(field: Field, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::NotAnInteger {
            field,
            value: value.to_owned(),
        })
}

fn parse_real(field: Field, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| ConfigError::NotANumber {
            field,
            value: value.to_owned(),
        })
}

fn check_range<T: PartialOrd>(
    field: Field,
    value: &str,
    parsed: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError> {
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(out_of_range(field, value))
    }
}

fn widen(range: RangeInclusive<u32>) -> RangeInclusive<i64> {
    i64::from(*range.start())..=i64::from(*range.end())
}

fn out_of_range(field: Field, value: &str) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value: value.to_owned(),
    }
}
