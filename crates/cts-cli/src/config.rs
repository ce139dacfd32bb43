//! Preset table loading.
//!
//! A preset file is a JSON object from puzzle size to symbol list, e.g.
//! `{"4": ["+", "▲", "●", "■"]}`. Entries override the built-in presets of
//! the same size; other built-in sizes stay available.

use crate::error::CliError;
use cts_core::PresetTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PRESETS_FILE: &str = "cts_presets.json";

/// Location of the user's preset file, if the platform has a config directory.
pub fn default_presets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PRESETS_FILE))
}

/// Load presets from `explicit`, else from the config directory if a file
/// exists there, else fall back to the built-in table.
pub fn load_presets(explicit: Option<&Path>) -> Result<PresetTable, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_presets_path().filter(|path| path.exists()) {
            Some(path) => path,
            None => {
                debug!("using built-in presets");
                return Ok(PresetTable::default());
            }
        },
    };

    let json = fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    let table = merge_presets(&json).map_err(|source| CliError::Presets {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "loaded presets");
    Ok(table)
}

/// Overlay the presets in `json` onto the built-in table. Each key must equal
/// the number of symbols it lists.
pub fn merge_presets(json: &str) -> Result<PresetTable, serde_json::Error> {
    let overrides: PresetTable = serde_json::from_str(json)?;
    let mut table = PresetTable::default();
    for (_, alphabet) in overrides.iter() {
        table.insert(alphabet.clone());
    }
    Ok(table)
}
