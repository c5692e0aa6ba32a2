// Frame timing
pub const FRAMES_PER_SECOND: u32 = 60;

/// Convert a millisecond window into whole frames at `FRAMES_PER_SECOND`.
pub const fn frames_from_millis(millis: u32) -> u32 {
    millis * FRAMES_PER_SECOND / 1000
}

// Gacha roulette
pub const GACHA_PRICE: u32 = 100;
pub const SPIN_DURATION_FRAMES: u32 = 120;
pub const SPIN_SLOWDOWN_START: u32 = 80;
pub const RESULT_DISPLAY_MS: u32 = 3000;

// Shop screen feedback
pub const PURCHASE_FEEDBACK_MS: u32 = 2000;
pub const ACHIEVEMENT_POPUP_MS: u32 = 2500;

// Achievement conditions
pub const LOW_ACCURACY_MIN_SHOTS: u32 = 5; // strictly more shots than this
pub const LOW_ACCURACY_MAX_PERCENT: f64 = 80.0;
pub const SURVIVAL_SECONDS: u32 = 60;
pub const GREEDY_COIN_THRESHOLD: u32 = 2000; // strictly more coins than this
pub const BEGINNER_LEVEL: u32 = 1;
pub const INTERMEDIATE_LEVEL: u32 = 3;
pub const DEFAULT_FINAL_LEVEL: u32 = 5;

// Save files
pub const DATA_DIR_NAME: &str = ".arcade_progress";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
pub const SAVE_FORMAT_VERSION: u32 = 1;
