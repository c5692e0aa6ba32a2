//! Currency balance contract.
//!
//! The coin balance belongs to the game state; the shop and the gacha machine
//! only touch it through this trait.

use serde::{Deserialize, Serialize};

pub trait CoinBalance {
    fn coins(&self) -> u32;
    fn deduct_coins(&mut self, amount: u32);
    fn add_coins(&mut self, amount: u32);
}

/// Plain coin counter. Never goes below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinPurse {
    pub coins: u32,
}

impl CoinPurse {
    pub fn new(coins: u32) -> Self {
        Self { coins }
    }
}

impl CoinBalance for CoinPurse {
    fn coins(&self) -> u32 {
        self.coins
    }

    fn deduct_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_sub(amount);
    }

    fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduct_saturates_at_zero() {
        let mut purse = CoinPurse::new(30);
        purse.deduct_coins(50);
        assert_eq!(purse.coins(), 0);
    }

    #[test]
    fn test_add_then_deduct() {
        let mut purse = CoinPurse::default();
        purse.add_coins(120);
        purse.deduct_coins(20);
        assert_eq!(purse.coins(), 100);
    }
}
