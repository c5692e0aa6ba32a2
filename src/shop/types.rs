use crate::error::UpgradeError;
use serde::{Deserialize, Serialize};

/// Ship upgrades sold in the shop, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItemId {
    MultiShot,
    RapidFire,
    Penetration,
    BulletSpeed,
    ShipSpeed,
}

impl ShopItemId {
    pub const ALL: [ShopItemId; 5] = [
        ShopItemId::MultiShot,
        ShopItemId::RapidFire,
        ShopItemId::Penetration,
        ShopItemId::BulletSpeed,
        ShopItemId::ShipSpeed,
    ];

    pub fn index(self) -> usize {
        match self {
            ShopItemId::MultiShot => 0,
            ShopItemId::RapidFire => 1,
            ShopItemId::Penetration => 2,
            ShopItemId::BulletSpeed => 3,
            ShopItemId::ShipSpeed => 4,
        }
    }

    pub fn def(self) -> &'static ShopItemDef {
        &SHOP_ITEMS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn max_level(self) -> u8 {
        self.def().max_level
    }
}

/// Static definition of a shop item. `prices[L - 1]` buys level `L`.
#[derive(Debug, Clone)]
pub struct ShopItemDef {
    pub id: ShopItemId,
    pub name: &'static str,
    pub description: &'static str,
    pub max_level: u8,
    pub prices: &'static [u32],
}

pub const SHOP_ITEMS: [ShopItemDef; 5] = [
    ShopItemDef {
        id: ShopItemId::MultiShot,
        name: "Multi Shot",
        description: "Fire multiple bullets at once",
        max_level: 3,
        prices: &[30, 60, 100],
    },
    ShopItemDef {
        id: ShopItemId::RapidFire,
        name: "Rapid Fire",
        description: "Shoot faster and more frequently",
        max_level: 5,
        prices: &[25, 50, 75, 100, 150],
    },
    ShopItemDef {
        id: ShopItemId::Penetration,
        name: "Penetration",
        description: "Bullets pierce through enemies",
        max_level: 2,
        prices: &[40, 80],
    },
    ShopItemDef {
        id: ShopItemId::BulletSpeed,
        name: "Bullet Speed",
        description: "Bullets travel faster",
        max_level: 3,
        prices: &[35, 70, 110],
    },
    ShopItemDef {
        id: ShopItemId::ShipSpeed,
        name: "Ship Speed",
        description: "Ship moves faster",
        max_level: 5,
        prices: &[20, 40, 60, 80, 100],
    },
];

/// Price of buying `level` of `item`; None outside `1..=max_level`.
pub fn price(item: ShopItemId, level: u8) -> Option<u32> {
    let def = item.def();
    if level == 0 || level > def.max_level {
        return None;
    }
    def.prices.get((level - 1) as usize).copied()
}

/// Upgrade-effects contract: who owns the purchased level of each item.
pub trait UpgradeLevels {
    /// Current level, 0 when not purchased.
    fn level(&self, item: ShopItemId) -> u8;

    fn set_level(&mut self, item: ShopItemId, level: u8) -> Result<(), UpgradeError>;
}

/// Purchased upgrade levels, persisted with the player's progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipUpgrades {
    pub levels: [u8; 5], // indexed by ShopItemId::index
}

impl ShipUpgrades {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_maxed(&self, item: ShopItemId) -> bool {
        self.level(item) >= item.max_level()
    }

    /// Sum of all purchased levels.
    pub fn total_levels(&self) -> u32 {
        self.levels.iter().map(|&l| l as u32).sum()
    }
}

impl UpgradeLevels for ShipUpgrades {
    fn level(&self, item: ShopItemId) -> u8 {
        self.levels[item.index()]
    }

    fn set_level(&mut self, item: ShopItemId, level: u8) -> Result<(), UpgradeError> {
        let max_level = item.max_level();
        if level > max_level {
            return Err(UpgradeError::AboveMax { level, max_level });
        }
        self.levels[item.index()] = level;
        Ok(())
    }
}
