use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::viewport::precision::Precision;

/// The state field an option writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dimension,
    X,
    Y,
    Scale,
    MaxIterations,
    Palette,
    Precision,
    DisplayText,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dimension => "window dimension",
            Self::X => "x value",
            Self::Y => "y value",
            Self::Scale => "scale",
            Self::MaxIterations => "maximum iteration count",
            Self::Palette => "colour palette",
            Self::Precision => "precision",
            Self::DisplayText => "display text value",
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized option \"{0}\"")]
    UnrecognizedOption(String),

    #[error("no value provided for option {0}")]
    MissingValue(String),

    #[error("specified {field} cannot be converted to a number: \"{value}\"")]
    NotANumber { field: Field, value: String },

    #[error("specified {field} cannot be converted to an integer: \"{value}\"")]
    NotAnInteger { field: Field, value: String },

    #[error("specified {field} not in valid range: \"{value}\"")]
    OutOfRange { field: Field, value: String },

    #[error("specified scale {scale} exceeds maximum value of 100.0")]
    ScaleTooLarge { scale: f64 },

    #[error(
        "specified scale {scale} less than minimum value of {} for {precision} precision",
        precision.min_scale()
    )]
    ScaleTooSmall { scale: f64, precision: Precision },

    #[error("option -l may not be used in conjunction with other options")]
    ExclusivityViolation,

    #[error("could not open state file \"{}\"", path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// The field a value error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NotANumber { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            Self::ScaleTooLarge { .. } | Self::ScaleTooSmall { .. } => Some(Field::Scale),
            Self::UnrecognizedOption(_)
            | Self::MissingValue(_)
            | Self::ExclusivityViolation
            | Self::FileOpenFailure { .. } => None,
        }
    }
}
