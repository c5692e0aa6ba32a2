//! JSON persistence helpers for ~/.arcade_progress/ save files.

use crate::constants::DATA_DIR_NAME;
use crate::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the ~/.arcade_progress/ directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let home_dir = dirs::home_dir().ok_or(StorageError::HomeDirUnavailable)?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.arcade_progress/.
pub fn save_path(filename: &str) -> Result<PathBuf, StorageError> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file. Missing and malformed files are both errors.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a value as pretty-printed JSON. Writes a sibling temp file first and
/// renames it over the target so a crash never leaves a half-written save.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
