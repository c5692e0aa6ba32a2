//! Arcade Progress - progression and economy core for an arcade shooter
//!
//! Achievements, ship color unlocks, the gacha machine and the upgrade shop.
//! The game drives everything through a `ProgressionSession` once per frame.

pub mod achievements;
pub mod config;
pub mod constants;
pub mod cosmetics;
pub mod error;
pub mod gacha;
pub mod menu;
pub mod session;
pub mod shop;
pub mod simulator;
pub mod utils;
pub mod wallet;

pub use achievements::{AchievementLedger, AchievementStore, InMemoryStore, JsonFileStore};
pub use config::EconomyConfig;
pub use cosmetics::{ColorRegistry, ShipColor};
pub use error::{ConfigError, PurchaseError, RollError, StorageError, UpgradeError};
pub use gacha::GachaMachine;
pub use menu::MenuAction;
pub use session::ProgressionSession;
pub use shop::{ShipUpgrades, ShopItemId, ShopMenu, UpgradeLevels};
pub use wallet::{CoinBalance, CoinPurse};
