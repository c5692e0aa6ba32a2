//! Main simulation runner. Every run is a real `ProgressionSession`
//! backed by an in-memory store, so results follow gameplay rules exactly.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::achievements::InMemoryStore;
use crate::config::EconomyConfig;
use crate::session::ProgressionSession;
use crate::shop::{can_afford, price, ShipUpgrades, ShopItemId, UpgradeLevels};
use crate::wallet::{CoinBalance, CoinPurse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                earned = stats.coins_earned,
                shop = stats.shop_spend,
                gacha = stats.gacha_spend,
                colors = stats.colors_unlocked,
                achievements = stats.achievements.len(),
                "run finished"
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one session from level 1 to the final level.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let economy = EconomyConfig {
        final_level: config.final_level,
        ..EconomyConfig::headless()
    };
    let mut session = ProgressionSession::start(economy, InMemoryStore::new());
    let _span = info_span!("sim_session", session = %session.id).entered();

    let mut wallet = CoinPurse::new(0);
    let mut upgrades = ShipUpgrades::new();
    let mut stats = RunStats::default();
    let hit_rate = config.effective_hit_rate();
    let mut elapsed = 0u32;

    for level in 1..=config.final_level {
        for _ in 0..config.seconds_per_level {
            elapsed += 1;
            for _ in 0..config.shots_per_second {
                session.on_shot_fired();
                if rng.gen_bool(hit_rate) {
                    session.on_enemy_defeated();
                    earn(&mut session, &mut wallet, &mut stats, config.coins_per_kill);
                }
            }
            session.on_time_elapsed_seconds(elapsed);
        }

        if level == config.final_level {
            session.on_boss_defeated();
            earn(&mut session, &mut wallet, &mut stats, config.boss_bonus);
        }
        session.on_level_cleared(level);

        if config.buy_upgrades {
            buy_upgrades(&mut session, &mut wallet, &mut upgrades, &mut stats);
        }
        if config.roll_gacha {
            spend_on_gacha(&mut session, &mut wallet, rng, &mut stats);
        }
    }

    stats.upgrade_levels = upgrades.total_levels();
    stats.colors_unlocked = session.colors.unlocked_count();
    stats.achievements = session
        .achievements
        .achievements()
        .iter()
        .filter(|a| a.is_unlocked())
        .map(|a| a.name.to_string())
        .collect();
    session.end();
    stats
}

fn earn(
    session: &mut ProgressionSession<InMemoryStore>,
    wallet: &mut CoinPurse,
    stats: &mut RunStats,
    amount: u32,
) {
    wallet.add_coins(amount);
    stats.coins_earned += amount as u64;
    session.on_coin_balance(wallet.coins());
}

/// Buy the cheapest affordable next level until nothing is affordable.
fn buy_upgrades(
    session: &mut ProgressionSession<InMemoryStore>,
    wallet: &mut CoinPurse,
    upgrades: &mut ShipUpgrades,
    stats: &mut RunStats,
) {
    loop {
        let cheapest = ShopItemId::ALL
            .iter()
            .copied()
            .filter(|&item| can_afford(item, &*upgrades, wallet.coins()))
            .min_by_key(|&item| price(item, upgrades.level(item) + 1).unwrap_or(u32::MAX));
        let Some(item) = cheapest else {
            break;
        };
        let level = upgrades.level(item) + 1;
        match session.purchase(item, level, wallet, upgrades) {
            Ok(receipt) => stats.shop_spend += receipt.price as u64,
            Err(e) => {
                debug!(error = %e, "simulated purchase failed");
                break;
            }
        }
    }
}

/// Roll until the wallet can no longer pay, playing every spin to the end.
fn spend_on_gacha<R: Rng>(
    session: &mut ProgressionSession<InMemoryStore>,
    wallet: &mut CoinPurse,
    rng: &mut R,
    stats: &mut RunStats,
) {
    let roll_price = session.gacha.price();
    let max_frames = session.config.spin_duration_frames;

    while wallet.coins() >= roll_price {
        if session.roll_gacha(wallet, rng).is_err() {
            break;
        }
        stats.rolls += 1;
        stats.gacha_spend += roll_price as u64;

        for _ in 0..=max_frames {
            if let Some(result) = session.update() {
                if result.is_new {
                    stats.new_colors += 1;
                } else {
                    stats.duplicates += 1;
                }
                break;
            }
        }
    }
}
