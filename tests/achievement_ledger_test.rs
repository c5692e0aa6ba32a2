//! Integration test: Achievement ledger
//!
//! Exercises the ledger through its public API with an in-memory store:
//! unlock bookkeeping, the recent-unlock mailbox, the notification sink,
//! the low-accuracy trigger and recovery from storage failures.

use arcade_progress::achievements::{
    AchievementLedger, AchievementStore, InMemoryStore, UnlockOutcome, ALL_ACHIEVEMENTS,
};
use std::cell::RefCell;
use std::rc::Rc;

fn fresh_ledger() -> AchievementLedger<InMemoryStore> {
    AchievementLedger::new(InMemoryStore::new())
}

/// Fire a volley, then score the hits. Accuracy is checked on each hit.
fn volley(ledger: &mut AchievementLedger<InMemoryStore>, fired: u32, hit: u32) {
    for _ in 0..fired {
        ledger.on_shot_fired();
    }
    for _ in 0..hit {
        ledger.on_enemy_defeated();
    }
}

// =============================================================================
// Unlock bookkeeping
// =============================================================================

#[test]
fn test_double_unlock_saves_once_and_sets_mailbox_twice() {
    let mut ledger = fresh_ledger();

    assert_eq!(ledger.unlock("Boss Slayer"), UnlockOutcome::Unlocked);
    assert_eq!(ledger.consume_recent_unlock(), Some("Boss Slayer"));
    assert_eq!(ledger.store().save_count(), 1);

    assert_eq!(ledger.unlock("Boss Slayer"), UnlockOutcome::AlreadyUnlocked);
    assert_eq!(ledger.consume_recent_unlock(), Some("Boss Slayer"));
    assert_eq!(ledger.store().save_count(), 1);
}

#[test]
fn test_unlock_is_reflected_in_storage() {
    let mut ledger = fresh_ledger();
    ledger.unlock("Mr. Greedy");

    let snapshot = ledger.store().snapshot().unwrap();
    assert_eq!(snapshot.get("Mr. Greedy"), Some(&true));
    assert_eq!(snapshot.get("Beginner"), Some(&false));
    assert_eq!(snapshot.len(), ALL_ACHIEVEMENTS.len());
}

#[test]
fn test_unknown_name_changes_nothing() {
    let mut ledger = fresh_ledger();
    assert_eq!(ledger.unlock("Pacifist"), UnlockOutcome::Unknown);
    assert_eq!(ledger.consume_recent_unlock(), None);
    assert_eq!(ledger.unlocked_count(), 0);
    assert_eq!(ledger.store().save_count(), 0);
}

#[test]
fn test_mailbox_keeps_only_latest() {
    let mut ledger = fresh_ledger();
    ledger.unlock("Beginner");
    ledger.unlock("First Blood");
    assert_eq!(ledger.consume_recent_unlock(), Some("First Blood"));
    assert_eq!(ledger.consume_recent_unlock(), None);
}

#[test]
fn test_sink_sees_every_announcement() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut ledger = fresh_ledger();
    let sink_seen = Rc::clone(&seen);
    ledger.set_notification_sink(Box::new(move |name: &str| {
        sink_seen.borrow_mut().push(name.to_string());
    }));

    ledger.unlock("Beginner");
    ledger.unlock("Beginner");
    ledger.unlock("Nope");

    assert_eq!(*seen.borrow(), vec!["Beginner", "Beginner"]);
}

// =============================================================================
// Gameplay triggers
// =============================================================================

#[test]
fn test_low_accuracy_unlocks_once_and_does_not_retrigger() {
    let mut ledger = fresh_ledger();

    // 10 fired, 7 hit
    volley(&mut ledger, 10, 7);
    assert!(ledger.is_unlocked("Bad Sniper"));
    assert_eq!(ledger.consume_recent_unlock(), Some("Bad Sniper"));
    let saves = ledger.store().save_count();

    // 11 fired, 9 hit
    ledger.on_shot_fired();
    ledger.on_enemy_defeated();
    ledger.on_enemy_defeated();
    assert_eq!(ledger.shots_fired(), 11);
    assert_eq!(ledger.shots_hit(), 9);
    assert_eq!(ledger.store().save_count(), saves);
    assert_eq!(ledger.consume_recent_unlock(), None);
}

#[test]
fn test_accuracy_ignored_until_more_than_five_shots() {
    let mut ledger = fresh_ledger();
    ledger.on_shot_fired();
    ledger.on_shot_fired();
    ledger.on_shot_fired();
    ledger.on_shot_fired();
    ledger.on_shot_fired();
    ledger.on_enemy_defeated();
    assert!(!ledger.is_unlocked("Bad Sniper"));
    assert!(ledger.is_unlocked("First Blood"));
}

#[test]
fn test_sharp_shooter_never_gets_bad_sniper() {
    let mut ledger = fresh_ledger();
    for _ in 0..19 {
        ledger.on_shot_fired();
        ledger.on_enemy_defeated();
    }
    ledger.on_shot_fired();
    assert!(!ledger.is_unlocked("Bad Sniper"));
    let accuracy = ledger.accuracy_percent().unwrap();
    assert!((accuracy - 95.0).abs() < 1e-9);
}

#[test]
fn test_survival_and_economy_triggers() {
    let mut ledger = fresh_ledger();
    ledger.on_time_elapsed_seconds(59);
    assert!(!ledger.is_unlocked("Bear Grylls"));
    ledger.on_time_elapsed_seconds(60);
    assert!(ledger.is_unlocked("Bear Grylls"));

    ledger.on_coin_balance(2000);
    assert!(!ledger.is_unlocked("Mr. Greedy"));
    ledger.on_coin_balance(2001);
    assert!(ledger.is_unlocked("Mr. Greedy"));
}

#[test]
fn test_level_progression_triggers() {
    let mut ledger = fresh_ledger();
    ledger.on_level_cleared(1, 5);
    assert!(ledger.is_unlocked("Beginner"));
    assert!(!ledger.is_unlocked("Intermediate"));

    ledger.on_level_cleared(3, 5);
    assert!(ledger.is_unlocked("Intermediate"));
    assert!(!ledger.is_unlocked("Conqueror"));

    ledger.on_level_cleared(5, 5);
    ledger.on_boss_defeated();
    assert!(ledger.is_unlocked("Conqueror"));
    assert!(ledger.is_unlocked("Boss Slayer"));
}

// =============================================================================
// Storage failures
// =============================================================================

#[test]
fn test_failed_save_keeps_flag_in_memory() {
    let mut store = InMemoryStore::new();
    store.set_fail_saves(true);
    let mut ledger = AchievementLedger::new(store);

    assert_eq!(ledger.unlock("First Blood"), UnlockOutcome::Unlocked);
    assert!(ledger.is_unlocked("First Blood"));
    assert_eq!(ledger.store().save_count(), 0);
}

#[test]
fn test_failed_load_writes_baseline() {
    let mut store = InMemoryStore::new();
    store.set_fail_loads(true);
    let ledger = AchievementLedger::load(store);

    assert_eq!(ledger.unlocked_count(), 0);
    assert_eq!(ledger.store().save_count(), 1);
    let snapshot = ledger.store().snapshot().unwrap();
    assert!(snapshot.values().all(|unlocked| !unlocked));
}

#[test]
fn test_stored_flags_restore_without_reverting() {
    let store = InMemoryStore::with_unlocked(&["Conqueror", "Not In Catalogue"]);
    let mut ledger = AchievementLedger::new(store);
    ledger.store_mut().set_fail_saves(true);
    ledger.unlock("Beginner");
    assert!(!ledger.store().is_saved_unlocked("Beginner"));

    ledger.load_from_storage();
    assert!(ledger.is_unlocked("Beginner"));
    assert!(ledger.is_unlocked("Conqueror"));
    assert_eq!(ledger.unlocked_count(), 2);
}

#[test]
fn test_store_trait_object_loads_saved_map() {
    let mut ledger = fresh_ledger();
    ledger.unlock("Teal Ghost");
    ledger.unlock("Intermediate");
    let store: &dyn AchievementStore = ledger.store();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.get("Intermediate"), Some(&true));
    assert!(!loaded.contains_key("Teal Ghost"));
}
