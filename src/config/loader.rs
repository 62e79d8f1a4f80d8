//! Configuration loading with defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{LanekitError, Result};

use super::{BoardConfig, CONFIG_FILE_NAME};

/// Resolve the config file path inside a directory
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load configuration for the board.
///
/// With an explicit file the file must exist and parse. Without one,
/// `lanekit.json` in the working directory is used when present and
/// defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<BoardConfig> {
    match explicit {
        Some(path) => read_config_file(path),
        None => load_config_from(Path::new(".")),
    }
}

/// Load configuration from a directory, falling back to defaults.
///
/// If `lanekit.json` exists under `root` it is read and merged with
/// defaults; if it doesn't, the default configuration is returned.
pub fn load_config_from(root: &Path) -> Result<BoardConfig> {
    let path = config_path(root);
    if path.exists() {
        read_config_file(&path)
    } else {
        Ok(BoardConfig::default())
    }
}

/// Read, parse and validate one config file
fn read_config_file(path: &Path) -> Result<BoardConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LanekitError::FileNotFound(path.display().to_string())
        } else {
            LanekitError::Io(e)
        }
    })?;

    let config: BoardConfig = serde_json::from_str(&content).map_err(|e| {
        LanekitError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })?;

    config.validate()?;
    Ok(config)
}
