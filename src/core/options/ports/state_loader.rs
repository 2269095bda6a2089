use std::path::Path;

use crate::core::options::errors::ConfigError;
use crate::core::options::OptionPair;

/// Expands a saved state file into the flag/value pairs it was written from.
pub trait StateLoaderPort {
    fn load_options(&self, path: &Path) -> Result<Vec<OptionPair>, ConfigError>;
}
