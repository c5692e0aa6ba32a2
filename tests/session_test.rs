//! Integration test: Progression session
//!
//! The session is the game's single entry point. These tests play short
//! runs through it and check that achievements, reward colors, the gacha
//! and the shop stay in step.

use arcade_progress::achievements::{AchievementStore, InMemoryStore};
use arcade_progress::config::EconomyConfig;
use arcade_progress::cosmetics::{PaletteCommand, DEFAULT_COLOR, REWARD_POOL};
use arcade_progress::menu::MenuAction;
use arcade_progress::session::ProgressionSession;
use arcade_progress::shop::{ShipUpgrades, ShopItemId};
use arcade_progress::wallet::{CoinBalance, CoinPurse};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_session() -> ProgressionSession<InMemoryStore> {
    ProgressionSession::start(EconomyConfig::headless(), InMemoryStore::new())
}

#[test]
fn test_fresh_session_owns_only_default_color() {
    let session = new_session();
    assert_eq!(session.colors.unlocked_colors(), vec![DEFAULT_COLOR]);
    assert_eq!(session.colors.selected(), DEFAULT_COLOR);
    assert_eq!(session.achievements.unlocked_count(), 0);
}

#[test]
fn test_rewards_carry_over_to_next_session() {
    let mut session = new_session();
    session.on_level_cleared(3);
    session.on_boss_defeated();
    let store = session.end();

    let next = ProgressionSession::start(EconomyConfig::headless(), store);
    for name in ["Teal", "Crimson"] {
        let color = REWARD_POOL.iter().find(|c| c.name == name).unwrap().color;
        assert!(next.colors.is_unlocked(color), "{}", name);
    }
    // Beginner has no reward color
    assert_eq!(next.colors.unlocked_count(), 3);
}

#[test]
fn test_gacha_roll_through_session() {
    let mut session = new_session();
    let mut wallet = CoinPurse::new(100);
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    session.roll_gacha(&mut wallet, &mut rng).unwrap();
    assert_eq!(wallet.coins(), 0);

    let mut result = None;
    for _ in 0..session.config.spin_duration_frames {
        result = session.update();
        if result.is_some() {
            break;
        }
    }
    let result = result.unwrap();
    assert!(session.colors.is_unlocked(result.color));
    assert_eq!(session.colors.selected(), result.color);
}

#[test]
fn test_purchase_and_greedy_unlock() {
    let mut session = new_session();
    let mut wallet = CoinPurse::new(2001);
    let mut upgrades = ShipUpgrades::new();

    session.on_coin_balance(wallet.coins());
    assert!(session.achievements.is_unlocked("Mr. Greedy"));

    session
        .purchase(ShopItemId::Penetration, 2, &mut wallet, &mut upgrades)
        .unwrap();
    assert_eq!(wallet.coins(), 1921);
    assert_eq!(upgrades.levels[ShopItemId::Penetration.index()], 2);
}

#[test]
fn test_shop_popup_shows_latest_unlock_once() {
    let mut session = ProgressionSession::start(EconomyConfig::default(), InMemoryStore::new());
    session.on_shot_fired();
    session.on_enemy_defeated();
    session.on_time_elapsed_seconds(75);

    let shop = session.open_shop();
    assert_eq!(shop.achievement_popup(), Some("Bear Grylls"));
    let shop = session.open_shop();
    assert_eq!(shop.achievement_popup(), None);
}

#[test]
fn test_palette_selects_reward_color() {
    let mut session = new_session();
    session.on_boss_defeated();

    let mut palette = session.open_palette();
    assert_eq!(palette.colors().len(), 2);
    session.handle_palette(&mut palette, MenuAction::Down);
    let command = session.handle_palette(&mut palette, MenuAction::Confirm);

    let crimson = REWARD_POOL[0].color;
    assert_eq!(command, PaletteCommand::Selected(crimson));
    assert_eq!(session.colors.selected(), crimson);
}

#[test]
fn test_gacha_colors_do_not_outlive_session() {
    let mut session = new_session();
    let mut wallet = CoinPurse::new(100);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    session.roll_gacha(&mut wallet, &mut rng).unwrap();
    let mut won = None;
    while won.is_none() {
        won = session.update();
    }
    let won = won.unwrap().color;
    assert!(session.colors.is_unlocked(won));

    let next = ProgressionSession::start(EconomyConfig::headless(), session.end());
    assert!(!next.colors.is_unlocked(won));
    assert_eq!(next.colors.unlocked_colors(), vec![DEFAULT_COLOR]);
    assert_eq!(next.colors.selected(), DEFAULT_COLOR);
}

#[test]
fn test_end_hands_back_store_with_progress() {
    let mut session = new_session();
    session.on_boss_defeated();
    let store = session.end();
    assert!(store.is_saved_unlocked("Boss Slayer"));
}

#[test]
fn test_open_uses_configured_save_dir() {
    let dir = std::env::temp_dir().join(format!("arcade_progress_session_{}", uuid::Uuid::new_v4()));
    let config = EconomyConfig {
        save_dir: Some(dir.clone()),
        ..EconomyConfig::headless()
    };

    let mut session = ProgressionSession::open(config.clone()).unwrap();
    session.on_time_elapsed_seconds(60);
    let store = session.end();
    assert!(store.path().starts_with(&dir));
    assert_eq!(store.load().unwrap().get("Bear Grylls"), Some(&true));

    let next = ProgressionSession::open(config).unwrap();
    let indigo = REWARD_POOL.iter().find(|c| c.name == "Indigo").unwrap().color;
    assert!(next.colors.is_unlocked(indigo));

    let _ = std::fs::remove_dir_all(&dir);
}
