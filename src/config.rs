//! Economy configuration.

use crate::constants::{
    frames_from_millis, ACHIEVEMENT_POPUP_MS, DEFAULT_FINAL_LEVEL, GACHA_PRICE,
    PURCHASE_FEEDBACK_MS, RESULT_DISPLAY_MS, SPIN_DURATION_FRAMES, SPIN_SLOWDOWN_START,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunables for a progression session. Every field falls back to its default
/// when missing from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Coins charged per gacha roll
    pub gacha_price: u32,

    /// Frames from roll acceptance to result
    pub spin_duration_frames: u32,

    /// Frame at which the roulette stops spinning at full speed
    pub spin_slowdown_start: u32,

    /// Frames the gacha result stays on screen
    pub result_display_frames: u32,

    /// Frames the shop purchase feedback stays on screen
    pub purchase_feedback_frames: u32,

    /// Frames the achievement popup stays on screen
    pub achievement_popup_frames: u32,

    /// Level number whose clear unlocks "Conqueror"
    pub final_level: u32,

    /// Directory for save files (None = ~/.arcade_progress)
    pub save_dir: Option<PathBuf>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            gacha_price: GACHA_PRICE,
            spin_duration_frames: SPIN_DURATION_FRAMES,
            spin_slowdown_start: SPIN_SLOWDOWN_START,
            result_display_frames: frames_from_millis(RESULT_DISPLAY_MS),
            purchase_feedback_frames: frames_from_millis(PURCHASE_FEEDBACK_MS),
            achievement_popup_frames: frames_from_millis(ACHIEVEMENT_POPUP_MS),
            final_level: DEFAULT_FINAL_LEVEL,
            save_dir: None,
        }
    }
}

impl EconomyConfig {
    /// Quick config for headless runs: no on-screen windows to wait out.
    pub fn headless() -> Self {
        Self {
            result_display_frames: 0,
            purchase_feedback_frames: 0,
            achievement_popup_frames: 0,
            ..Default::default()
        }
    }

    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gacha_price == 0 {
            return Err(ConfigError::Zero {
                field: "gacha_price",
            });
        }
        if self.final_level == 0 {
            return Err(ConfigError::Zero {
                field: "final_level",
            });
        }
        if self.spin_slowdown_start >= self.spin_duration_frames {
            return Err(ConfigError::SlowdownAfterEnd {
                slowdown_start: self.spin_slowdown_start,
                duration: self.spin_duration_frames,
            });
        }
        Ok(())
    }
}
