/// One `flag,value` entry, as given on the command line or read from a state file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPair {
    pub flag: String,
    pub value: String,
}

impl OptionPair {
    #[must_use]
    pub fn new(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            value: value.into(),
        }
    }
}

/// Flattens pairs back into the token stream the validator consumes.
#[must_use]
pub fn flatten_pairs(pairs: &[OptionPair]) -> Vec<&str> {
    pairs
        .iter()
        .flat_map(|pair| [pair.flag.as_str(), pair.value.as_str()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_preserves_order() {
        let pairs = vec![OptionPair::new("-x", "0.5"), OptionPair::new("-c", "abyss")];

        assert_eq!(flatten_pairs(&pairs), vec!["-x", "0.5", "-c", "abyss"]);
    }
}
