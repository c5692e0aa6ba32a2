//! Achievement types and data structures.

use crate::cosmetics::ShipColor;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    Beginner,
    Intermediate,
    BossSlayer,
    MrGreedy,
    FirstBlood,
    BearGrylls,
    BadSniper,
    Conqueror,
}

impl AchievementId {
    /// Stable display name, also the storage key.
    pub fn name(self) -> &'static str {
        super::data::get_achievement_def(self).name
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub reward: Option<ShipColor>,
}

/// An achievement with its unlock flag. The flag only ever goes false -> true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub reward: Option<ShipColor>,
    unlocked: bool,
}

impl Achievement {
    pub fn from_def(def: &AchievementDef) -> Self {
        Self {
            id: def.id,
            name: def.name,
            description: def.description,
            reward: def.reward,
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub(crate) fn mark_unlocked(&mut self) {
        self.unlocked = true;
    }
}

/// What an unlock request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The flag flipped and the catalogue was persisted.
    Unlocked,
    /// Already unlocked; only the announcement was replayed.
    AlreadyUnlocked,
    /// No achievement has that name.
    Unknown,
}

/// One-shot guards for conditions that keep re-qualifying every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionGuards {
    pub first_kill: bool,
    pub low_accuracy: bool,
    pub survivor: bool,
    pub boss: bool,
    pub greedy: bool,
    pub beginner: bool,
    pub intermediate: bool,
    pub conqueror: bool,
}
