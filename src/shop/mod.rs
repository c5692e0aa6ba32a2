//! Upgrade shop: tiered prices, purchases and the shop screen.

pub mod logic;
pub mod menu;
pub mod types;

pub use logic::{can_afford, purchase, PurchaseReceipt};
pub use menu::{ShopCommand, ShopMenu, ShopMode, ShopTab, TOTAL_ITEMS};
pub use types::{price, ShipUpgrades, ShopItemDef, ShopItemId, UpgradeLevels, SHOP_ITEMS};
