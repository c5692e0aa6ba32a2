//! Achievement ledger: unlock flags, gameplay counters and condition checks.

use super::data::{get_achievement_def, ALL_ACHIEVEMENTS};
use super::persistence::AchievementStore;
use super::types::{Achievement, AchievementId, ConditionGuards, UnlockOutcome};
use crate::constants::{
    BEGINNER_LEVEL, GREEDY_COIN_THRESHOLD, INTERMEDIATE_LEVEL, LOW_ACCURACY_MAX_PERCENT,
    LOW_ACCURACY_MIN_SHOTS, SURVIVAL_SECONDS,
};
use tracing::{debug, info, warn};

/// Presentation hook called synchronously whenever an achievement is announced.
pub trait NotificationSink {
    fn show_achievement_popup(&mut self, name: &str);
}

impl<F: FnMut(&str)> NotificationSink for F {
    fn show_achievement_popup(&mut self, name: &str) {
        self(name)
    }
}

/// Owns the achievement catalogue for one session.
///
/// Unlocks are announced through a single-slot mailbox (overwritten by each
/// unlock, cleared when read) and through an optional [`NotificationSink`].
/// Persistence happens only on a real false -> true transition; a failed save
/// is logged and the in-memory flag stays set.
pub struct AchievementLedger<S: AchievementStore> {
    achievements: Vec<Achievement>,
    store: S,
    sink: Option<Box<dyn NotificationSink>>,
    recent_unlock: Option<&'static str>,
    shots_fired: u32,
    shots_hit: u32,
    guards: ConditionGuards,
}

impl<S: AchievementStore> AchievementLedger<S> {
    /// Fresh catalogue, all locked. Does not touch storage.
    pub fn new(store: S) -> Self {
        Self {
            achievements: ALL_ACHIEVEMENTS.iter().map(Achievement::from_def).collect(),
            store,
            sink: None,
            recent_unlock: None,
            shots_fired: 0,
            shots_hit: 0,
            guards: ConditionGuards::default(),
        }
    }

    /// Fresh catalogue with flags restored from storage.
    pub fn load(store: S) -> Self {
        let mut ledger = Self::new(store);
        ledger.load_from_storage();
        ledger
    }

    /// Restore unlock flags from storage. Stored flags can only unlock;
    /// unknown names are ignored. If the store cannot be read, the current
    /// flags are written back so a valid file exists from now on.
    pub fn load_from_storage(&mut self) {
        match self.store.load() {
            Ok(flags) => {
                for achievement in &mut self.achievements {
                    if flags.get(achievement.name).copied().unwrap_or(false) {
                        achievement.mark_unlocked();
                    }
                }
                debug!(
                    unlocked = self.unlocked_count(),
                    "restored achievements from storage"
                );
            }
            Err(e) => {
                warn!(error = %e, "failed to load achievement file, creating a new one");
                self.persist();
            }
        }
    }

    pub fn set_notification_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sink = Some(sink);
    }

    /// Unlock by display name.
    ///
    /// Always refreshes the mailbox and notifies the sink, so an already
    /// unlocked achievement can be re-announced. Only the first unlock flips
    /// the flag and saves.
    pub fn unlock(&mut self, name: &str) -> UnlockOutcome {
        let Some(index) = self.achievements.iter().position(|a| a.name == name) else {
            debug!(name, "ignoring unlock for unknown achievement");
            return UnlockOutcome::Unknown;
        };

        let name = self.achievements[index].name;
        self.recent_unlock = Some(name);

        let outcome = if self.achievements[index].is_unlocked() {
            UnlockOutcome::AlreadyUnlocked
        } else {
            self.achievements[index].mark_unlocked();
            info!(achievement = name, "achievement unlocked");
            self.persist();
            UnlockOutcome::Unlocked
        };

        if let Some(sink) = self.sink.as_mut() {
            sink.show_achievement_popup(name);
        }
        outcome
    }

    pub fn unlock_id(&mut self, id: AchievementId) -> UnlockOutcome {
        self.unlock(get_achievement_def(id).name)
    }

    /// Take the most recent unlock announcement, leaving the mailbox empty.
    pub fn consume_recent_unlock(&mut self) -> Option<&'static str> {
        self.recent_unlock.take()
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.achievements) {
            warn!(error = %e, "failed to save achievement file");
        }
    }

    // =========================================================================
    // Event Handlers (called from the game loop)
    // =========================================================================

    /// Called whenever the player fires.
    pub fn on_shot_fired(&mut self) {
        self.shots_fired = self.shots_fired.saturating_add(1);
    }

    /// Called when an enemy is destroyed by the player.
    /// Unlocks First Blood on the first kill of the session, and Bad Sniper
    /// once accuracy over more than 5 shots is at or below 80%.
    pub fn on_enemy_defeated(&mut self) {
        self.shots_hit = self.shots_hit.saturating_add(1);

        if !self.guards.first_kill {
            self.guards.first_kill = true;
            self.unlock_id(AchievementId::FirstBlood);
        }

        if !self.guards.low_accuracy && self.shots_fired > LOW_ACCURACY_MIN_SHOTS {
            let accuracy = self.shots_hit as f64 / self.shots_fired as f64 * 100.0;
            if accuracy <= LOW_ACCURACY_MAX_PERCENT {
                self.guards.low_accuracy = true;
                self.unlock_id(AchievementId::BadSniper);
            }
        }
    }

    /// Called periodically with the seconds survived in the current run.
    pub fn on_time_elapsed_seconds(&mut self, elapsed_seconds: u32) {
        if !self.guards.survivor && elapsed_seconds >= SURVIVAL_SECONDS {
            self.guards.survivor = true;
            self.unlock_id(AchievementId::BearGrylls);
        }
    }

    /// Called when a level is cleared. `final_level` is the last level of the game.
    pub fn on_level_cleared(&mut self, level: u32, final_level: u32) {
        if !self.guards.beginner && level >= BEGINNER_LEVEL {
            self.guards.beginner = true;
            self.unlock_id(AchievementId::Beginner);
        }
        if !self.guards.intermediate && level >= INTERMEDIATE_LEVEL {
            self.guards.intermediate = true;
            self.unlock_id(AchievementId::Intermediate);
        }
        if !self.guards.conqueror && level >= final_level {
            self.guards.conqueror = true;
            self.unlock_id(AchievementId::Conqueror);
        }
    }

    pub fn on_boss_defeated(&mut self) {
        if !self.guards.boss {
            self.guards.boss = true;
            self.unlock_id(AchievementId::BossSlayer);
        }
    }

    /// Called whenever the coin balance changes.
    pub fn on_coin_balance(&mut self, balance: u32) {
        if !self.guards.greedy && balance > GREEDY_COIN_THRESHOLD {
            self.guards.greedy = true;
            self.unlock_id(AchievementId::MrGreedy);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Catalogue in definition order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_unlocked(&self, name: &str) -> bool {
        self.achievements
            .iter()
            .any(|a| a.name == name && a.is_unlocked())
    }

    pub fn is_unlocked_id(&self, id: AchievementId) -> bool {
        self.achievements
            .iter()
            .any(|a| a.id == id && a.is_unlocked())
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.is_unlocked()).count()
    }

    pub fn total_count(&self) -> usize {
        self.achievements.len()
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_hit(&self) -> u32 {
        self.shots_hit
    }

    /// Hits per shot as a percentage; None before the first shot.
    pub fn accuracy_percent(&self) -> Option<f64> {
        if self.shots_fired == 0 {
            return None;
        }
        Some(self.shots_hit as f64 / self.shots_fired as f64 * 100.0)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
