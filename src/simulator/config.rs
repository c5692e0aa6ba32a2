//! Simulation configuration.

use crate::constants::DEFAULT_FINAL_LEVEL;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Number of levels in the game; clearing the last one ends the run
    pub final_level: u32,

    /// Seconds of play per level
    pub seconds_per_level: u32,

    /// Shots fired per second of play
    pub shots_per_second: u32,

    /// Chance that a shot kills an enemy (0.0-1.0)
    pub hit_rate: f64,

    /// Coins dropped per kill
    pub coins_per_kill: u32,

    /// Coins for clearing a level with a boss
    pub boss_bonus: u32,

    /// Visit the shop between levels and buy upgrades
    pub buy_upgrades: bool,

    /// Spend leftover coins on gacha rolls
    pub roll_gacha: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            final_level: DEFAULT_FINAL_LEVEL,
            seconds_per_level: 45,
            shots_per_second: 3,
            hit_rate: 0.6,
            coins_per_kill: 5,
            boss_bonus: 50,
            buy_upgrades: true,
            roll_gacha: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Hit rate as a probability. Non-finite values fall back to the default.
    pub fn effective_hit_rate(&self) -> f64 {
        if self.hit_rate.is_finite() {
            self.hit_rate.clamp(0.0, 1.0)
        } else {
            Self::default().hit_rate
        }
    }

    /// Small, fixed-seed config for quick checks.
    pub fn quick() -> Self {
        Self {
            num_runs: 50,
            seed: Some(42),
            ..Default::default()
        }
    }

    /// Player who never visits the shop and pours every coin into the gacha.
    pub fn gacha_only() -> Self {
        Self {
            buy_upgrades: false,
            ..Default::default()
        }
    }
}
