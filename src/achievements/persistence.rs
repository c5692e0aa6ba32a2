//! Achievement persistence gateway (load/save unlock flags).

use super::types::Achievement;
use crate::constants::{ACHIEVEMENTS_FILE, SAVE_FORMAT_VERSION};
use crate::error::StorageError;
use crate::utils::persistence::{load_json, save_json, save_path};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

/// Durable name -> unlocked store.
pub trait AchievementStore {
    /// Read the stored flags. Missing or corrupt storage is an error.
    fn load(&self) -> Result<HashMap<String, bool>, StorageError>;

    /// Write the flags of the whole catalogue.
    fn save(&mut self, achievements: &[Achievement]) -> Result<(), StorageError>;
}

/// On-disk layout of the achievements file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementSaveFile {
    pub version: u32,
    pub saved_at: i64,
    pub achievements: BTreeMap<String, bool>,
}

impl AchievementSaveFile {
    pub fn from_achievements(achievements: &[Achievement]) -> Self {
        Self {
            version: SAVE_FORMAT_VERSION,
            saved_at: chrono::Utc::now().timestamp(),
            achievements: achievements
                .iter()
                .map(|a| (a.name.to_string(), a.is_unlocked()))
                .collect(),
        }
    }
}

/// Stores achievements as pretty JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `achievements.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(ACHIEVEMENTS_FILE))
    }

    /// ~/.arcade_progress/achievements.json
    pub fn default_location() -> Result<Self, StorageError> {
        Ok(Self::new(save_path(ACHIEVEMENTS_FILE)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AchievementStore for JsonFileStore {
    fn load(&self) -> Result<HashMap<String, bool>, StorageError> {
        let file: AchievementSaveFile = load_json(&self.path)?;
        if file.version > SAVE_FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: file.version,
            });
        }
        Ok(file.achievements.into_iter().collect())
    }

    fn save(&mut self, achievements: &[Achievement]) -> Result<(), StorageError> {
        save_json(&self.path, &AchievementSaveFile::from_achievements(achievements))
    }
}

/// Store kept in memory. Used by the simulator and by tests, which can make
/// it fail on demand and count how often it was written.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    saved: Option<HashMap<String, bool>>,
    fail_loads: bool,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    /// Empty store; loading fails as if the save file were missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds the given names as unlocked.
    pub fn with_unlocked(names: &[&str]) -> Self {
        Self {
            saved: Some(names.iter().map(|n| (n.to_string(), true)).collect()),
            ..Default::default()
        }
    }

    pub fn set_fail_loads(&mut self, fail: bool) {
        self.fail_loads = fail;
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn snapshot(&self) -> Option<&HashMap<String, bool>> {
        self.saved.as_ref()
    }

    pub fn is_saved_unlocked(&self, name: &str) -> bool {
        self.saved
            .as_ref()
            .and_then(|m| m.get(name).copied())
            .unwrap_or(false)
    }
}

impl AchievementStore for InMemoryStore {
    fn load(&self) -> Result<HashMap<String, bool>, StorageError> {
        if self.fail_loads {
            return Err(io::Error::new(io::ErrorKind::Other, "injected load failure").into());
        }
        self.saved
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no saved achievements").into())
    }

    fn save(&mut self, achievements: &[Achievement]) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(io::Error::new(io::ErrorKind::Other, "injected save failure").into());
        }
        self.saved = Some(
            achievements
                .iter()
                .map(|a| (a.name.to_string(), a.is_unlocked()))
                .collect(),
        );
        self.save_count += 1;
        Ok(())
    }
}
