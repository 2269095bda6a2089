use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::core::options::OptionPair;
use crate::core::options::errors::ConfigError;
use crate::core::options::flag::Flag;
use crate::core::options::ports::state_loader::StateLoaderPort;
use crate::core::viewport::state::ViewportState;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not write state file \"{}\", aborting save", path.display())]
    SaveFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes the eight persisted fields as `flag,value` lines in fixed order.
///
/// Reals use the shortest representation that parses back to the same bits.
#[must_use]
pub fn serialize(state: &ViewportState) -> String {
    Flag::PERSISTED
        .iter()
        .filter_map(|&flag| {
            let value = match flag {
                Flag::Dimension => state.window_width.to_string(),
                Flag::X => state.x.to_string(),
                Flag::Y => state.y.to_string(),
                Flag::Scale => state.x_scale.to_string(),
                Flag::MaxIterations => state.max_it.to_string(),
                Flag::Palette => state.palette.to_string(),
                Flag::Precision => state.precision.to_string(),
                Flag::DisplayText => state.display_text.to_string(),
                Flag::Load => return None,
            };

            Some(format!("{flag},{value}\n"))
        })
        .collect()
}

/// Splits each non-blank line on its first comma.
///
/// A line without a comma becomes a pair with an empty value, which the
/// validator then rejects.
#[must_use]
pub fn deserialize(text: &str) -> Vec<OptionPair> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(',') {
            Some((flag, value)) => OptionPair::new(flag, value),
            None => OptionPair::new(line, ""),
        })
        .collect()
}

/// File-backed single-slot state storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateFile {}

impl StateFile {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn save(&self, state: &ViewportState, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let to_error = |source| PersistenceError::SaveFailure {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(serialize(state).as_bytes())
            .and_then(|()| writer.flush())
            .map_err(to_error)?;

        info!(path = %path.display(), "state saved");

        Ok(())
    }
}

impl StateLoaderPort for StateFile {
    fn load_options(&self, path: &Path) -> Result<Vec<OptionPair>, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| {
            warn!(path = %path.display(), %source, "could not read state file");
            ConfigError::FileOpenFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Undecodable bytes surface as invalid values rather than an open failure.
        Ok(deserialize(&String::from_utf8_lossy(&bytes)))
    }
}
