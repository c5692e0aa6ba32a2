//! Simulation report generation.

use crate::achievements::ALL_ACHIEVEMENTS;
use crate::cosmetics::{GACHA_POOL, REWARD_POOL};
use serde::Serialize;

/// Statistics collected from one simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub coins_earned: u64,
    pub shop_spend: u64,
    pub gacha_spend: u64,
    pub rolls: u32,
    pub new_colors: u32,
    pub duplicates: u32,
    pub upgrade_levels: u32,
    /// Includes the default color.
    pub colors_unlocked: usize,
    /// Names of the achievements unlocked by the end of the run
    pub achievements: Vec<String>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    // Economy
    pub avg_coins_earned: f64,
    pub avg_shop_spend: f64,
    pub avg_gacha_spend: f64,
    pub avg_upgrade_levels: f64,

    // Gacha
    pub avg_rolls: f64,
    pub avg_colors_collected: f64,
    pub duplicate_rate: f64,
    pub full_collection_rate: f64,

    /// (name, share of runs that unlocked it), in catalogue order
    pub achievement_rates: Vec<(String, f64)>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;

        let avg = |f: &dyn Fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / n;

        let avg_coins_earned = avg(&|r| r.coins_earned as f64);
        let avg_shop_spend = avg(&|r| r.shop_spend as f64);
        let avg_gacha_spend = avg(&|r| r.gacha_spend as f64);
        let avg_upgrade_levels = avg(&|r| r.upgrade_levels as f64);
        let avg_rolls = avg(&|r| r.rolls as f64);
        let avg_colors_collected = avg(&|r| r.colors_unlocked as f64);

        let total_rolls: u64 = runs.iter().map(|r| r.rolls as u64).sum();
        let total_dupes: u64 = runs.iter().map(|r| r.duplicates as u64).sum();
        let duplicate_rate = if total_rolls > 0 {
            total_dupes as f64 / total_rolls as f64
        } else {
            0.0
        };

        let all_gacha_colors = GACHA_POOL.len() as u32;
        let full_collection_rate = runs
            .iter()
            .filter(|r| r.new_colors >= all_gacha_colors)
            .count() as f64
            / n;

        let achievement_rates = ALL_ACHIEVEMENTS
            .iter()
            .map(|def| {
                let hits = runs
                    .iter()
                    .filter(|r| r.achievements.iter().any(|a| a == def.name))
                    .count();
                (def.name.to_string(), hits as f64 / n)
            })
            .collect();

        Self {
            num_runs,
            avg_coins_earned,
            avg_shop_spend,
            avg_gacha_spend,
            avg_upgrade_levels,
            avg_rolls,
            avg_colors_collected,
            duplicate_rate,
            full_collection_rate,
            achievement_rates,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 ECONOMY SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── COINS ────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Earned:          {:.0}\n",
            self.avg_coins_earned
        ));
        report.push_str(&format!("  Avg Shop Spend:      {:.0}\n", self.avg_shop_spend));
        report.push_str(&format!("  Avg Gacha Spend:     {:.0}\n", self.avg_gacha_spend));
        report.push_str(&format!(
            "  Avg Upgrade Levels:  {:.1}\n\n",
            self.avg_upgrade_levels
        ));

        report.push_str("── GACHA ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rolls:           {:.1}\n", self.avg_rolls));
        report.push_str(&format!(
            "  Avg Colors Owned:    {:.1} / {}\n",
            self.avg_colors_collected,
            1 + GACHA_POOL.len() + REWARD_POOL.len()
        ));
        report.push_str(&format!(
            "  Duplicate Rate:      {:.1}%\n",
            self.duplicate_rate * 100.0
        ));
        report.push_str(&format!(
            "  Full Collection:     {:.1}%\n\n",
            self.full_collection_rate * 100.0
        ));

        report.push_str("── ACHIEVEMENTS ─────────────────────────────────────────────────\n");
        for (name, rate) in &self.achievement_rates {
            let pct = rate * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<14} {:>5.1}% {}\n", name, pct, bar));
        }

        report
    }

    /// Export as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
