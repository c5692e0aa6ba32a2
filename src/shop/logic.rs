//! Shop purchase logic.

use super::types::{price, ShopItemId, UpgradeLevels};
use crate::error::PurchaseError;
use crate::wallet::CoinBalance;
use tracing::{info, warn};

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub item: ShopItemId,
    pub level: u8,
    pub price: u32,
    pub remaining_balance: u32,
}

impl PurchaseReceipt {
    /// Player-facing confirmation line.
    pub fn message(&self) -> String {
        format!("Purchased {} Level {}!", self.item.name(), self.level)
    }
}

/// Check if the player can afford the next level of an item.
pub fn can_afford<U>(item: ShopItemId, upgrades: &U, balance: u32) -> bool
where
    U: UpgradeLevels + ?Sized,
{
    let next = upgrades.level(item).saturating_add(1);
    match price(item, next) {
        Some(cost) => balance >= cost,
        None => false,
    }
}

/// Attempt to buy `level` of `item`.
///
/// Coins are only deducted once every check has passed, and are refunded in
/// full if the upgrade system refuses the new level.
pub fn purchase<W, U>(
    item: ShopItemId,
    level: u8,
    wallet: &mut W,
    upgrades: &mut U,
) -> Result<PurchaseReceipt, PurchaseError>
where
    W: CoinBalance + ?Sized,
    U: UpgradeLevels + ?Sized,
{
    let cost = price(item, level).ok_or(PurchaseError::InvalidLevel {
        level,
        max_level: item.max_level(),
    })?;

    let current_level = upgrades.level(item);
    if current_level >= level {
        info!(item = item.name(), level, current_level, "item already owned");
        return Err(PurchaseError::AlreadyOwned { current_level });
    }

    let balance = wallet.coins();
    if balance < cost {
        info!(price = cost, balance, "not enough coins for purchase");
        return Err(PurchaseError::InsufficientFunds {
            price: cost,
            balance,
        });
    }

    wallet.deduct_coins(cost);

    if let Err(e) = upgrades.set_level(item, level) {
        wallet.add_coins(cost);
        warn!(item = item.name(), level, error = %e, "failed to apply upgrade, refunded");
        return Err(PurchaseError::ApplyFailed { refunded: cost });
    }

    let receipt = PurchaseReceipt {
        item,
        level,
        price: cost,
        remaining_balance: wallet.coins(),
    };
    info!(
        item = item.name(),
        level,
        price = cost,
        remaining = receipt.remaining_balance,
        "purchased upgrade"
    );
    Ok(receipt)
}
