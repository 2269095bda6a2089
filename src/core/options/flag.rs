use std::fmt;

/// Command line flags understood by the options validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Load,
    Dimension,
    X,
    Y,
    Scale,
    MaxIterations,
    Palette,
    Precision,
    DisplayText,
}

impl Flag {
    pub const ALL: &'static [Self] = &[
        Self::Load,
        Self::Dimension,
        Self::X,
        Self::Y,
        Self::Scale,
        Self::MaxIterations,
        Self::Palette,
        Self::Precision,
        Self::DisplayText,
    ];

    /// Flags written to a state file, in file order.
    pub const PERSISTED: &'static [Self] = &[
        Self::Dimension,
        Self::X,
        Self::Y,
        Self::Scale,
        Self::MaxIterations,
        Self::Palette,
        Self::Precision,
        Self::DisplayText,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "-l",
            Self::Dimension => "-d",
            Self::X => "-x",
            Self::Y => "-y",
            Self::Scale => "-s",
            Self::MaxIterations => "-i",
            Self::Palette => "-c",
            Self::Precision => "-p",
            Self::DisplayText => "-t",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.as_str() == token)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for &flag in Flag::ALL {
            assert_eq!(Flag::from_token(flag.as_str()), Some(flag));
        }
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(Flag::from_token("-q"), None);
        assert_eq!(Flag::from_token("x"), None);
        assert_eq!(Flag::from_token("--x"), None);
    }

    #[test]
    fn test_load_is_never_persisted() {
        assert!(!Flag::PERSISTED.contains(&Flag::Load));
        assert_eq!(Flag::PERSISTED.len(), 8);
    }
}
