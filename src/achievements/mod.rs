//! Achievement system module.
//!
//! The ledger tracks unlock flags and gameplay counters for a session.
//! Unlock flags persist through an [`AchievementStore`], by default
//! `~/.arcade_progress/achievements.json`.

pub mod data;
pub mod ledger;
pub mod persistence;
pub mod types;

pub use data::{find_by_name, get_achievement_def, ALL_ACHIEVEMENTS};
pub use ledger::{AchievementLedger, NotificationSink};
pub use persistence::{AchievementSaveFile, AchievementStore, InMemoryStore, JsonFileStore};
pub use types::{Achievement, AchievementDef, AchievementId, UnlockOutcome};
