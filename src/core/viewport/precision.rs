use std::fmt;
use std::str::FromStr;

/// Arithmetic width of the escape-time kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    #[default]
    Single,
    Double,
}

impl Precision {
    pub const ALL: &'static [Self] = &[Self::Single, Self::Double];

    /// Smallest scale at which this precision still resolves distinct pixels.
    #[must_use]
    pub const fn min_scale(self) -> f64 {
        match self {
            Self::Single => 0.00001,
            Self::Double => 0.00000000000002,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrecision(pub String);

impl FromStr for Precision {
    type Err = UnknownPrecision;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" | "float" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            other => Err(UnknownPrecision(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_is_an_alias_for_single() {
        assert_eq!("float".parse::<Precision>(), Ok(Precision::Single));
        assert_eq!("single".parse::<Precision>(), Ok(Precision::Single));
        assert_eq!("double".parse::<Precision>(), Ok(Precision::Double));
    }

    #[test]
    fn test_unknown_precision_is_rejected() {
        assert!("half".parse::<Precision>().is_err());
        assert!("".parse::<Precision>().is_err());
    }

    #[test]
    fn test_min_scale_is_smaller_for_double() {
        assert!(Precision::Double.min_scale() < Precision::Single.min_scale());
        assert_eq!(Precision::Single.min_scale(), 1e-5);
        assert_eq!(Precision::Double.min_scale(), 2e-14);
    }
}
