//! Session-scoped record of unlocked ship colors.

use super::types::{color_name, ShipColor, DEFAULT_COLOR, GACHA_POOL, REWARD_POOL};
use rand::Rng;
use std::collections::HashSet;

/// Unlocked colors plus the one currently on the ship.
///
/// Not persisted: every session starts with only the default color.
/// The selected color is always a member of the unlocked set.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    unlocked: HashSet<ShipColor>,
    selected: ShipColor,
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorRegistry {
    pub fn new() -> Self {
        let mut unlocked = HashSet::new();
        unlocked.insert(DEFAULT_COLOR);
        Self {
            unlocked,
            selected: DEFAULT_COLOR,
        }
    }

    /// Unlock a color. Returns true if it was newly unlocked.
    pub fn unlock(&mut self, color: ShipColor) -> bool {
        self.unlocked.insert(color)
    }

    pub fn is_unlocked(&self, color: ShipColor) -> bool {
        self.unlocked.contains(&color)
    }

    /// Put a color on the ship. Ignored unless the color is unlocked.
    pub fn select(&mut self, color: ShipColor) {
        if self.is_unlocked(color) {
            self.selected = color;
        }
    }

    pub fn selected(&self) -> ShipColor {
        self.selected
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlocked colors in display order: default, gacha pool order, reward
    /// pool order, then anything else sorted by RGB.
    pub fn unlocked_colors(&self) -> Vec<ShipColor> {
        let mut ordered: Vec<ShipColor> = std::iter::once(DEFAULT_COLOR)
            .chain(GACHA_POOL.iter().map(|c| c.color))
            .chain(REWARD_POOL.iter().map(|c| c.color))
            .filter(|c| self.unlocked.contains(c))
            .collect();

        let mut extras: Vec<ShipColor> = self
            .unlocked
            .iter()
            .copied()
            .filter(|c| !ordered.contains(c))
            .collect();
        extras.sort_by_key(|c| c.to_tuple());
        ordered.extend(extras);
        ordered
    }

    /// Uniform pick over the gacha pool, regardless of what is already owned.
    pub fn random_pool_color<R: Rng>(rng: &mut R) -> ShipColor {
        GACHA_POOL[rng.gen_range(0..GACHA_POOL.len())].color
    }

    pub fn name_of(color: ShipColor) -> &'static str {
        color_name(color)
    }

    /// Back to only the default color. For session boundaries.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
