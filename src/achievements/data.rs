//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};
use crate::cosmetics::types::{BRONZE, CRIMSON, INDIGO, SILVER, TEAL};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::Beginner,
        name: "Beginner",
        description: "Clear level 1",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::Intermediate,
        name: "Intermediate",
        description: "Clear level 3",
        reward: Some(TEAL),
    },
    AchievementDef {
        id: AchievementId::BossSlayer,
        name: "Boss Slayer",
        description: "Defeat a boss",
        reward: Some(CRIMSON),
    },
    AchievementDef {
        id: AchievementId::MrGreedy,
        name: "Mr. Greedy",
        description: "Have more than 2000 coins",
        reward: Some(BRONZE),
    },
    AchievementDef {
        id: AchievementId::FirstBlood,
        name: "First Blood",
        description: "Defeat your first enemy",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::BearGrylls,
        name: "Bear Grylls",
        description: "Survive for 60 seconds",
        reward: Some(INDIGO),
    },
    AchievementDef {
        id: AchievementId::BadSniper,
        name: "Bad Sniper",
        description: "Under 80% accuracy",
        reward: None,
    },
    AchievementDef {
        id: AchievementId::Conqueror,
        name: "Conqueror",
        description: "Clear the final level",
        reward: Some(SILVER),
    },
];

/// Get the definition for an achievement ID.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or(&ALL_ACHIEVEMENTS[0])
}

/// Find a definition by its display name.
pub fn find_by_name(name: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.name == name)
}
